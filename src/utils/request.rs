//! Helpers for pulling core inputs out of HTTP requests.

use crate::AppError;
use axum::http::{HeaderMap, header};
use serde_json::json;

/// Extracts the client signature recorded with each hit.
///
/// This is the `User-Agent` header, or an empty string when it is absent.
/// Non-UTF-8 bytes are replaced rather than rejected so a hit is never lost
/// over a malformed header.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::USER_AGENT, "curl/8.5.0".parse().unwrap());
///
/// assert_eq!(client_signature(&headers), "curl/8.5.0");
/// ```
pub fn client_signature(headers: &HeaderMap) -> String {
    headers
        .get(header::USER_AGENT)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default()
}

/// Checks that a path component contains only ASCII letters and digits.
///
/// Anything else can never name a link, so it is reported as not found.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] for components with other characters.
pub fn validate_path_component(component: &str) -> Result<(), AppError> {
    if component.bytes().all(|b| b.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(AppError::not_found(
            "Link not found",
            json!({ "identifier": component }),
        ))
    }
}
