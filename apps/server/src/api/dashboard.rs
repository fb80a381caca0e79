use std::sync::Arc;

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::get, Extension, Json, Router};
use propvest_core::dashboard::DashboardSummary;

async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> ApiResult<Json<DashboardSummary>> {
    Ok(Json(state.dashboard_service.get_summary(&user_id)?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(get_dashboard))
}
