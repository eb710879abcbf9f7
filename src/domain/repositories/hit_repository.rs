//! Repository trait for the per-link hit log.

use crate::domain::entities::Hit;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for appending and reading visit events.
///
/// Hits live in the same storage unit as the link record, after the
/// destination line. The log is strictly additive: nothing is ever truncated
/// or reordered.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FsHitRepository`] - append-mode file writes
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_hit.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HitRepository: Send + Sync {
    /// Appends one hit stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the link has no storage unit.
    /// Returns [`AppError::Storage`] if the unit cannot be written.
    async fn append(&self, identifier: &str, client_signature: &str) -> Result<Hit, AppError>;

    /// Returns the full raw content of the storage unit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the link has no storage unit.
    /// Returns [`AppError::Storage`] if the unit cannot be read.
    async fn read_all(&self, identifier: &str) -> Result<Vec<u8>, AppError>;
}
