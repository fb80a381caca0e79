use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use propvest_core::directory::{Agent, Builder, NewAgent, NewBuilder};

async fn list_builders(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Builder>>> {
    Ok(Json(state.directory_service.list_builders()?))
}

async fn get_builder(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Builder>> {
    Ok(Json(state.directory_service.get_builder(&id)?))
}

async fn create_builder(
    State(state): State<Arc<AppState>>,
    Json(builder): Json<NewBuilder>,
) -> ApiResult<(StatusCode, Json<Builder>)> {
    let created = state.directory_service.create_builder(builder).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_agents(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Agent>>> {
    Ok(Json(state.directory_service.list_agents()?))
}

async fn get_agent(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Agent>> {
    Ok(Json(state.directory_service.get_agent(&id)?))
}

async fn create_agent(
    State(state): State<Arc<AppState>>,
    Json(agent): Json<NewAgent>,
) -> ApiResult<(StatusCode, Json<Agent>)> {
    let created = state.directory_service.create_agent(agent).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub fn public_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/builders", get(list_builders))
        .route("/builders/{id}", get(get_builder))
        .route("/agents", get(list_agents))
        .route("/agents/{id}", get(get_agent))
}

pub fn admin_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/builders", post(create_builder))
        .route("/agents", post(create_agent))
}
