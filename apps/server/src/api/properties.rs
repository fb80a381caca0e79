use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use propvest_core::{
    constants::DISPLAY_DECIMAL_PRECISION,
    investments::{CalculatorInput, InvestmentCalculation},
    properties::{NewProperty, Property, PropertyFilter, PropertyUpdate},
};

async fn list_properties(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<PropertyFilter>,
) -> ApiResult<Json<Vec<Property>>> {
    let properties = state.property_service.list_properties(&filter)?;
    Ok(Json(properties))
}

async fn get_property(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Property>> {
    let property = state.property_service.get_property(&id)?;
    Ok(Json(property))
}

async fn calculate_investment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(input): Json<CalculatorInput>,
) -> ApiResult<Json<InvestmentCalculation>> {
    let mut calculation = state.investment_service.calculate(&id, input)?;
    calculation.projection = calculation.projection.rounded(DISPLAY_DECIMAL_PRECISION);
    Ok(Json(calculation))
}

async fn create_property(
    State(state): State<Arc<AppState>>,
    Json(property): Json<NewProperty>,
) -> ApiResult<(StatusCode, Json<Property>)> {
    let created = state.property_service.create_property(property).await?;
    tracing::info!("Created property {}", created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_property(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(property): Json<PropertyUpdate>,
) -> ApiResult<Json<Property>> {
    if property.id != id {
        return Err(ApiError::BadRequest(format!(
            "Body id '{}' does not match path id '{}'",
            property.id, id
        )));
    }
    let updated = state.property_service.update_property(property).await?;
    Ok(Json(updated))
}

async fn delete_property(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.property_service.delete_property(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn public_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/properties", get(list_properties))
        .route("/properties/{id}", get(get_property))
        .route("/properties/{id}/calculate", post(calculate_investment))
}

pub fn admin_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/properties", post(create_property))
        .route("/properties/{id}", put(update_property).delete(delete_property))
}
