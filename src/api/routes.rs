//! API route configuration.

use crate::api::handlers::{analytics_handler, create_link_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes.
///
/// # Endpoints
///
/// - `POST /links`                          - Register a destination
/// - `GET  /links/{identifier}/analytics`   - Destination and recorded hits
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(create_link_handler))
        .route("/links/{identifier}/analytics", get(analytics_handler))
}
