//! Link creation form handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the creation form.
///
/// Renders `templates/create.html`, a single `destination` field posting to
/// `/save`.
#[derive(Template, WebTemplate)]
#[template(path = "create.html")]
struct CreateTemplate {}

/// Renders the creation form.
///
/// # Endpoint
///
/// `GET /create`
pub async fn create_handler() -> impl IntoResponse {
    CreateTemplate {}
}
