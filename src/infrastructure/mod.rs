//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`cache`] - Destination caching (in-memory and no-op implementations)
//! - [`persistence`] - Filesystem repository implementations

pub mod cache;
pub mod persistence;
