//! Repository trait for link records.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for content-addressed link records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FsLinkRepository`] - one file per link
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Registers a destination, creating its record if it does not exist yet.
    ///
    /// Idempotent: registering a known destination returns the existing link
    /// and leaves its hit history untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the destination is empty or spans
    /// more than one line.
    /// Returns [`AppError::Storage`] on I/O errors.
    async fn create(&self, destination: &str) -> Result<Link, AppError>;

    /// Loads a link by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record exists for the identifier.
    /// Returns [`AppError::Storage`] on I/O errors or a corrupted record.
    async fn load(&self, identifier: &str) -> Result<Link, AppError>;

    /// Lists every registered link, ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the store cannot be enumerated.
    async fn list(&self) -> Result<Vec<Link>, AppError>;
}
