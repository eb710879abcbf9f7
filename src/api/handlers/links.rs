//! Handler for link registration endpoint.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, CreateLinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a destination and returns its identifier.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "destination": "https://example.com/a" }
/// ```
///
/// # Response
///
/// `201 Created` with:
///
/// ```json
/// {
///   "identifier": "5f2b...e1",
///   "destination": "https://example.com/a",
///   "short_url": "http://localhost:8080/go/5f2b...e1",
///   "analytics_url": "http://localhost:8080/analytics/5f2b...e1"
/// }
/// ```
///
/// Registering the same destination again returns the same identifier.
///
/// # Errors
///
/// Returns 400 Bad Request if the destination is not an http(s) URL.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    payload.validate()?;

    let destination = payload.destination.trim();
    let is_web_url = url::Url::parse(destination)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false);

    if !is_web_url {
        return Err(AppError::bad_request(
            "Only HTTP and HTTPS destinations are allowed",
            json!({ "destination": destination }),
        ));
    }

    let link = state.link_service.register_destination(destination).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse {
            short_url: state.short_url(&link.identifier),
            analytics_url: state.analytics_url(&link.identifier),
            identifier: link.identifier,
            destination: link.destination,
        }),
    ))
}
