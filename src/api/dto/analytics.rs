//! DTOs for link analytics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Link metadata with a page of its recorded hits.
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub pagination: PaginationMeta,
    pub identifier: String,
    pub destination: String,
    pub total: usize,
    pub items: Vec<HitInfo>,
}

/// Individual hit, in recorded order.
#[derive(Debug, Serialize)]
pub struct HitInfo {
    pub recorded_at: DateTime<Utc>,
    pub client_signature: String,
}

/// Pagination metadata for responses.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: usize,
    pub total_pages: u32,
}
