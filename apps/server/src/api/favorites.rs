use std::sync::Arc;

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Extension, Json, Router,
};
use propvest_core::{favorites::FavoriteToggle, properties::Property};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddFavoriteBody {
    property_id: String,
}

async fn list_favorites(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> ApiResult<Json<Vec<Property>>> {
    Ok(Json(
        state.favorite_service.list_favorite_properties(&user_id)?,
    ))
}

async fn list_favorite_ids(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(state.favorite_service.list_favorite_ids(&user_id)?))
}

async fn add_favorite(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(body): Json<AddFavoriteBody>,
) -> ApiResult<Json<FavoriteToggle>> {
    let result = state
        .favorite_service
        .add_favorite(&user_id, &body.property_id)
        .await?;
    Ok(Json(result))
}

async fn toggle_favorite(
    Path(property_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> ApiResult<Json<FavoriteToggle>> {
    let result = state
        .favorite_service
        .toggle_favorite(&user_id, &property_id)
        .await?;
    Ok(Json(result))
}

async fn remove_favorite(
    Path(property_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> ApiResult<Json<FavoriteToggle>> {
    let result = state
        .favorite_service
        .remove_favorite(&user_id, &property_id)
        .await?;
    Ok(Json(result))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/favorites", get(list_favorites).post(add_favorite))
        .route("/favorites/ids", get(list_favorite_ids))
        .route("/favorites/{id}/toggle", post(toggle_favorite))
        .route("/favorites/{id}", delete(remove_favorite))
}
