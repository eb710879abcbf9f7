//! Handlers for following a link.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request::{client_signature, validate_path_component};

/// Records a hit and redirects to the destination.
///
/// # Endpoint
///
/// `GET /go/{identifier}`
///
/// The `User-Agent` header is logged as the client signature. The hit is
/// written before the response is sent.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier was never registered.
pub async fn go_handler(
    Path(identifier): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    validate_path_component(&identifier)?;

    let destination = state
        .link_service
        .visit(&identifier, &client_signature(&headers))
        .await?;

    Ok(Redirect::temporary(&destination))
}

/// Records a hit without redirecting.
///
/// # Endpoint
///
/// `GET /collect/{identifier}`
///
/// Intended for tracking pixels and beacons. Responds with
/// `200 OK {identifier}` as plain text.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier was never registered.
pub async fn collect_handler(
    Path(identifier): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<String, AppError> {
    validate_path_component(&identifier)?;

    state
        .link_service
        .visit(&identifier, &client_signature(&headers))
        .await?;

    Ok(format!("200 OK {identifier}"))
}
