//! DTOs for link registration endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to register a destination.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The destination URL (must be valid HTTP/HTTPS). Surrounding whitespace
    /// is trimmed before hashing.
    #[validate(url(message = "Invalid URL format"))]
    pub destination: String,
}

/// Registered link with ready-to-share URLs.
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    pub identifier: String,
    pub destination: String,
    pub short_url: String,
    pub analytics_url: String,
}
