//! Application error type and its HTTP mapping.
//!
//! Every core operation returns [`AppError`]; the HTTP layer turns it into a
//! JSON error body. No variant is fatal to the process.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::io;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned to API clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The caller supplied an empty or malformed destination.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The identifier has no storage unit.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Open/read/write/permission fault on the storage directory.
    #[error("{message}")]
    Storage { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn storage(message: impl Into<String>, details: Value) -> Self {
        Self::Storage {
            message: message.into(),
            details,
        }
    }

    /// Returns the stable error code string used in JSON bodies.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Storage { .. } => "storage_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Storage { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code: self.code(),
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request("Validation failed", json!(errors))
    }
}

/// Maps a filesystem error on a storage unit to an [`AppError`].
///
/// A missing file means the identifier was never registered; every other
/// kind is a storage fault. The raw OS error is kept in `details` only.
pub fn map_io_error(e: io::Error, identifier: &str) -> AppError {
    if e.kind() == io::ErrorKind::NotFound {
        return AppError::not_found("Link not found", json!({ "identifier": identifier }));
    }

    AppError::storage(
        "Storage error",
        json!({ "identifier": identifier, "reason": e.to_string() }),
    )
}
