use std::sync::Arc;

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Extension, Json, Router,
};
use propvest_core::users::{KycRecord, KycReview, KycSubmission};

// Records leave the server with the document number masked.

async fn get_kyc(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> ApiResult<Json<Option<KycRecord>>> {
    let record = state.user_service.get_kyc(&user_id)?;
    Ok(Json(record.map(|r| r.masked())))
}

async fn submit_kyc(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(submission): Json<KycSubmission>,
) -> ApiResult<Json<KycRecord>> {
    let record = state.user_service.submit_kyc(&user_id, submission).await?;
    Ok(Json(record.masked()))
}

async fn review_kyc(
    Path(subject_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(reviewer_id)): Extension<AuthUser>,
    Json(review): Json<KycReview>,
) -> ApiResult<Json<KycRecord>> {
    let record = state
        .user_service
        .review_kyc(&reviewer_id, &subject_id, review.approve, review.note)
        .await?;
    tracing::info!(
        "KYC for {} reviewed by {}: {}",
        subject_id,
        reviewer_id,
        record.status.as_str()
    );
    Ok(Json(record.masked()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/kyc", get(get_kyc).post(submit_kyc))
}

pub fn admin_router() -> Router<Arc<AppState>> {
    Router::new().route("/kyc/{user_id}/review", post(review_kyc))
}
