//! HTTP server initialization and runtime setup.
//!
//! Handles storage and cache setup and the Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::cache;
use crate::infrastructure::persistence::StorageDir;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage directory (created if missing)
/// - Destination cache (or NullCache when disabled)
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The data directory cannot be created
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let storage = StorageDir::open(&config.data_dir)
        .with_context(|| format!("Failed to open data directory {}", config.data_dir))?;
    tracing::info!("Storing links in {}", storage.root().display());

    let cache = cache::from_capacity(config.cache_capacity);
    tracing::info!("Cache backend: {}", cache.name());

    let state = AppState::new(storage, cache, config.base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
