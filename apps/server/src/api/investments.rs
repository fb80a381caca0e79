use std::sync::Arc;

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use propvest_core::investments::{BuySharesRequest, Investment};

async fn list_investments(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> ApiResult<Json<Vec<Investment>>> {
    Ok(Json(state.investment_service.list_investments(&user_id)?))
}

async fn get_investment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> ApiResult<Json<Investment>> {
    Ok(Json(state.investment_service.get_investment(&user_id, &id)?))
}

async fn buy_shares(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(request): Json<BuySharesRequest>,
) -> ApiResult<(StatusCode, Json<Investment>)> {
    let investment = state
        .investment_service
        .buy_shares(&user_id, request)
        .await?;
    tracing::info!(
        "User {} bought {} shares of {}",
        user_id,
        investment.shares,
        investment.property_id
    );
    Ok((StatusCode::CREATED, Json(investment)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/investments", get(list_investments).post(buy_shares))
        .route("/investments/{id}", get(get_investment))
}
