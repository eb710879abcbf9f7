//! HTML page route configuration.

use crate::state::AppState;
use crate::web::handlers::{analytics_page_handler, create_handler, save_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Browser-facing routes.
///
/// # Endpoints
///
/// - `GET  /create`                  - Creation form
/// - `POST /save`                    - Form submission, redirects to analytics
/// - `GET  /analytics/{identifier}`  - Destination and hit history
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/create", get(create_handler))
        .route("/save", post(save_handler))
        .route("/analytics/{identifier}", get(analytics_page_handler))
}
