use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{routing::post, Json, Router};
use propvest_core::{
    constants::DISPLAY_DECIMAL_PRECISION,
    projection::{ProjectionInput, ProjectionResult},
};

/// Runs the projector on caller-supplied inputs, without any listing bounds.
async fn project_returns(Json(input): Json<ProjectionInput>) -> ApiResult<Json<ProjectionResult>> {
    let result = input.project().map_err(propvest_core::Error::from)?;
    Ok(Json(result.rounded(DISPLAY_DECIMAL_PRECISION)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/calculator/project", post(project_returns))
}
