use std::sync::Arc;

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::get, Extension, Json, Router};
use propvest_core::users::{ProfileUpdate, User};

async fn get_me(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> ApiResult<Json<User>> {
    Ok(Json(state.user_service.get_user(&user_id)?))
}

async fn update_me(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(update): Json<ProfileUpdate>,
) -> ApiResult<Json<User>> {
    let user = state.user_service.update_profile(&user_id, update).await?;
    Ok(Json(user))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/auth/me", get(get_me).put(update_me))
}
