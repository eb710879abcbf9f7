//! Top-level router configuration combining API and page routes.
//!
//! # Route Structure
//!
//! - `GET  /go/{identifier}`       - Record a hit and redirect
//! - `GET  /collect/{identifier}`  - Record a hit without redirecting
//! - `GET  /health`                - Health check: storage, cache
//! - `/create`, `/save`, `/analytics/{identifier}` - HTML pages
//! - `/api/*`                      - JSON API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{collect_handler, go_handler, health_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/go/{identifier}", get(go_handler))
        .route("/collect/{identifier}", get(collect_handler))
        .route("/health", get(health_handler))
        .merge(web::routes::page_routes())
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
