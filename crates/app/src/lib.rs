//! Sports Manager application composition root
//!
//! Builds the document store selected by configuration and composes the
//! league router with the shared infrastructure routes.

use std::sync::Arc;

use axum::Router;
use sports_manager_auth::{AuthConfig, TokenIssuer};
use sports_manager_common::{Config, StoreBackend};
use sports_manager_league::{
    DocumentStore, LeagueRepositories, LeagueState, MemoryDocumentStore, PgDocumentStore,
};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

/// Create the main application router for `config`.
///
/// With the postgres backend this connects, runs migrations and fails if
/// the database is unreachable.
pub async fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    let store = create_store(config).await?;
    let tokens = TokenIssuer::new(auth_config(config)?);
    let state = LeagueState::new(LeagueRepositories::new(store), tokens);

    Ok(create_router(state))
}

/// Compose domain routes with infrastructure routes and HTTP middleware
pub fn create_router(state: LeagueState) -> Router {
    Router::new()
        .route("/health", axum::routing::get(health_check))
        .merge(sports_manager_league::routes().with_state(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .into_inner(),
        )
}

/// Token settings derived from application config
pub fn auth_config(config: &Config) -> Result<AuthConfig, anyhow::Error> {
    let ttl = i64::try_from(config.token_ttl_secs)
        .map_err(|_| anyhow::anyhow!("TOKEN_TTL_SECS is out of range"))?;
    Ok(AuthConfig::new(config.jwt_secret.clone()).with_ttl_secs(ttl))
}

async fn create_store(config: &Config) -> Result<Arc<dyn DocumentStore>, anyhow::Error> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory document store; data is lost on shutdown");
            Ok(Arc::new(MemoryDocumentStore::new()))
        }
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required"))?;

            let pool = PgPoolOptions::new()
                .max_connections(10)
                .connect(database_url)
                .await
                .map_err(|e| anyhow::anyhow!("Database connection failed: {}", e))?;
            tracing::info!("Database connection established");

            let store = PgDocumentStore::new(pool);
            store
                .migrate()
                .await
                .map_err(|e| anyhow::anyhow!("Database migration failed: {}", e))?;

            Ok(Arc::new(store))
        }
    }
}

/// Install the global tracing subscriber: pretty output unless the
/// environment asks for JSON logs
#[mutants::skip] // Installs a process-global subscriber
pub fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.json_logs() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .init();
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
