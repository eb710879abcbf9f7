//! Link analytics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::domain::entities::TIMESTAMP_FORMAT;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request::validate_path_component;

/// One row of the hits table.
pub struct HitRow {
    pub recorded_at: String,
    pub client_signature: String,
}

/// Template for the analytics page.
///
/// Renders `templates/analytics.html` with:
/// - Destination and shareable short URL
/// - Hits table
/// - Raw stored history
#[derive(Template, WebTemplate)]
#[template(path = "analytics.html")]
pub struct AnalyticsTemplate {
    pub identifier: String,
    pub destination: String,
    pub short_url: String,
    pub collect_url: String,
    pub hits: Vec<HitRow>,
    pub history: String,
}

/// Renders the analytics page for a link.
///
/// # Endpoint
///
/// `GET /analytics/{identifier}`
///
/// # Errors
///
/// Returns 404 Not Found if the identifier was never registered.
pub async fn analytics_page_handler(
    Path(identifier): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    validate_path_component(&identifier)?;

    let analytics = state.link_service.get_analytics(&identifier).await?;

    let hits = analytics
        .hits()
        .into_iter()
        .map(|hit| HitRow {
            recorded_at: hit.recorded_at.format(TIMESTAMP_FORMAT).to_string(),
            client_signature: hit.client_signature,
        })
        .collect();

    Ok(AnalyticsTemplate {
        short_url: state.short_url(&identifier),
        collect_url: state.collect_url(&identifier),
        history: analytics.history_text(),
        identifier: analytics.link.identifier,
        destination: analytics.link.destination,
        hits,
    })
}
