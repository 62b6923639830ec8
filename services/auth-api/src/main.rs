//! Savora Auth API
//!
//! Credential authentication microservice: signup with salted password
//! hashing, login verification, and bearer-token issuance.

mod config;
mod error;
mod handlers;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Savora Auth API");

    let config = Config::from_env()?;

    // Connect to the store and apply pending migrations
    let pool = savora_db::create_pool(&config.database_url).await?;
    savora_db::run_migrations(&pool).await?;

    let repo = Arc::new(savora_db::PgCredentialRepository::new(pool.clone()));
    let auth = savora_auth_core::AuthService::new(config.auth.clone(), repo);

    let state = AppState::new(auth, pool);

    // Build router
    let app = Router::new()
        .route("/", get(handlers::welcome))
        .route("/health", get(handlers::health))
        .route("/ready", get(handlers::ready))
        .route("/auth/signup", post(handlers::signup))
        .route("/auth/login", post(handlers::login))
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(config.request_timeout))
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
