use std::sync::Arc;

use crate::{
    auth::{decode_secret_key, random_secret_key, AuthManager},
    config::Config,
};
use propvest_core::{
    dashboard::{DashboardService, DashboardServiceTrait},
    directory::{DirectoryRepositoryTrait, DirectoryService, DirectoryServiceTrait},
    favorites::{FavoriteRepositoryTrait, FavoriteService, FavoriteServiceTrait},
    investments::{InvestmentRepositoryTrait, InvestmentService, InvestmentServiceTrait},
    properties::{PropertyRepositoryTrait, PropertyService, PropertyServiceTrait},
    users::{UserRepositoryTrait, UserService, UserServiceTrait},
};
use propvest_storage_sqlite::{
    directory::DirectoryRepository, favorites::FavoriteRepository,
    investments::InvestmentRepository, properties::PropertyRepository, users::UserRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub property_service: Arc<dyn PropertyServiceTrait>,
    pub directory_service: Arc<dyn DirectoryServiceTrait>,
    pub favorite_service: Arc<dyn FavoriteServiceTrait>,
    pub investment_service: Arc<dyn InvestmentServiceTrait>,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub dashboard_service: Arc<dyn DashboardServiceTrait>,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing() {
    let log_format = std::env::var("PV_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

fn build_auth(config: &Config) -> anyhow::Result<AuthManager> {
    let secret = match config.jwt_secret.as_deref() {
        Some(raw) => decode_secret_key(raw)?,
        None => {
            tracing::warn!(
                "PV_JWT_SECRET is not set; using a random key, tokens will not survive a restart"
            );
            random_secret_key()
        }
    };
    Ok(AuthManager::new(&secret, config.access_token_ttl))
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let (pool, writer) = propvest_storage_sqlite::open(&config.db_path)?;
    tracing::info!("Database path in use: {}", config.db_path);

    let property_repository: Arc<dyn PropertyRepositoryTrait> =
        Arc::new(PropertyRepository::new(pool.clone(), writer.clone()));
    let directory_repository: Arc<dyn DirectoryRepositoryTrait> =
        Arc::new(DirectoryRepository::new(pool.clone(), writer.clone()));
    let favorite_repository: Arc<dyn FavoriteRepositoryTrait> =
        Arc::new(FavoriteRepository::new(pool.clone(), writer.clone()));
    let investment_repository: Arc<dyn InvestmentRepositoryTrait> =
        Arc::new(InvestmentRepository::new(pool.clone(), writer.clone()));
    let user_repository: Arc<dyn UserRepositoryTrait> =
        Arc::new(UserRepository::new(pool.clone(), writer));

    let property_service = Arc::new(PropertyService::new(
        property_repository.clone(),
        directory_repository.clone(),
    ));
    let directory_service = Arc::new(DirectoryService::new(directory_repository));
    let favorite_service = Arc::new(FavoriteService::new(
        favorite_repository.clone(),
        property_repository.clone(),
    ));
    let investment_service = Arc::new(InvestmentService::new(
        investment_repository.clone(),
        property_repository.clone(),
        user_repository.clone(),
    ));
    let user_service = Arc::new(
        UserService::new(user_repository.clone()).with_admin_emails(&config.admin_emails),
    );
    let dashboard_service = Arc::new(DashboardService::new(
        user_repository,
        favorite_repository,
        investment_repository,
        property_repository,
    ));

    Ok(Arc::new(AppState {
        property_service,
        directory_service,
        favorite_service,
        investment_service,
        user_service,
        dashboard_service,
        auth: Arc::new(build_auth(config)?),
    }))
}
