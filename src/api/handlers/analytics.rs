//! Handler for link analytics endpoint.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::analytics::{AnalyticsResponse, HitInfo};
use crate::api::dto::pagination::PaginationParams;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request::validate_path_component;

/// Returns a link's destination and a page of its hits in recorded order.
///
/// # Endpoint
///
/// `GET /api/links/{identifier}/analytics`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1)
/// - `page_size` (optional): Items per page (default: 100, max: 1000)
///
/// # Errors
///
/// Returns 404 Not Found if the identifier was never registered.
/// Returns 400 Bad Request if pagination parameters are invalid.
pub async fn analytics_handler(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    validate_path_component(&identifier)?;

    let window = params.window()?;

    let analytics = state.link_service.get_analytics(&identifier).await?;
    let hits = analytics.hits();
    let total = hits.len();

    let items = window
        .slice(hits)
        .into_iter()
        .map(|hit| HitInfo {
            recorded_at: hit.recorded_at,
            client_signature: hit.client_signature,
        })
        .collect();

    Ok(Json(AnalyticsResponse {
        pagination: window.meta(total),
        identifier: analytics.link.identifier,
        destination: analytics.link.destination,
        total,
        items,
    }))
}
