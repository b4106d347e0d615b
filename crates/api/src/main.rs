use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use persistence::{JsonFileStorage, Repositories, Storage};

mod app;
mod config;
mod error;
mod jobs;
mod middleware;
mod routes;
mod services;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::load()?;

    // Initialize logging and metrics
    middleware::logging::init_logging(&config.logging);
    middleware::init_metrics();

    info!("Starting Garden Platform API v{}", env!("CARGO_PKG_VERSION"));

    // Open storage and load every collection
    tokio::fs::create_dir_all(&config.storage.uploads_dir).await?;
    let storage: Arc<dyn Storage> =
        Arc::new(JsonFileStorage::new(&config.storage.data_dir).await?);
    let repos = Repositories::load(storage.clone()).await?;

    // Build application
    let state = app::AppState::new(config, storage, repos);
    jobs::spawn_session_cleanup(state.sessions.clone());
    jobs::spawn_cart_cleanup(state.carts.clone(), state.config.server.cart_idle_ttl_secs);

    let addr = state.config.socket_addr();
    let app = app::create_app(state);

    // Start server
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
