//! Form submission handler.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveForm {
    #[serde(default)]
    pub destination: String,
}

/// Registers the submitted destination and redirects to its analytics page.
///
/// # Endpoint
///
/// `POST /save` (form field `destination`)
///
/// # Errors
///
/// Returns 400 Bad Request if the destination is blank.
pub async fn save_handler(
    State(state): State<AppState>,
    Form(form): Form<SaveForm>,
) -> Result<impl IntoResponse, AppError> {
    let destination = form.destination.trim();

    if destination.is_empty() {
        return Err(AppError::bad_request(
            "Destination must not be empty",
            json!({}),
        ));
    }

    let link = state.link_service.register_destination(destination).await?;

    Ok(Redirect::to(&format!("/analytics/{}", link.identifier)))
}
