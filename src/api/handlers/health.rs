//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Storage**: Data directory exists and is writable
/// 2. **Cache**: Backend reports healthy
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "storage": { "status": "ok", "message": "Data directory: ./data" },
///     "cache": { "status": "ok", "message": "Cache backend: memory" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let storage_check = check_storage(&state).await;

    let cache_check = check_cache(&state).await;

    let all_healthy = storage_check.status == "ok" && cache_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            storage: storage_check,
            cache: cache_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the storage directory is usable.
async fn check_storage(state: &AppState) -> CheckStatus {
    let root = state.storage.root().display().to_string();

    if state.storage.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Data directory: {}", root)),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Data directory unavailable: {}", root)),
        }
    }
}

async fn check_cache(state: &AppState) -> CheckStatus {
    if state.cache.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Cache backend: {}", state.cache.name())),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Cache backend failed: {}", state.cache.name())),
        }
    }
}
