use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::HeaderValue,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    auth::{self, require_admin, require_jwt},
    config::Config,
    main_lib::AppState,
};

mod calculator;
mod dashboard;
mod directory;
mod favorites;
mod investments;
mod kyc;
mod profile;
mod properties;

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn readyz() -> &'static str {
    "ok"
}

fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    if config.cors_allow.iter().any(|o| o == "*") {
        return Ok(CorsLayer::new().allow_origin(Any).allow_headers(Any).allow_methods(Any));
    }
    let origins = config
        .cors_allow
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin '{o}'"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_headers(Any)
        .allow_methods(Any))
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> anyhow::Result<Router> {
    let cors = cors_layer(config)?;

    let public = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .merge(properties::public_router())
        .merge(calculator::router())
        .merge(directory::public_router());

    let authenticated = Router::new()
        .merge(profile::router())
        .merge(favorites::router())
        .merge(investments::router())
        .merge(kyc::router())
        .merge(dashboard::router())
        .route_layer(from_fn_with_state(state.clone(), require_jwt));

    // Layers run outside-in, so the token is checked before the role.
    let admin = Router::new()
        .merge(properties::admin_router())
        .merge(directory::admin_router())
        .merge(kyc::admin_router())
        .route_layer(from_fn_with_state(state.clone(), require_admin))
        .route_layer(from_fn_with_state(state.clone(), require_jwt));

    let api = public.merge(authenticated).merge(admin);

    Ok(Router::new()
        .nest("/api/v1", api)
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http()))
}
