//! Repository trait definitions for the domain layer.
//!
//! These traits abstract access to storage units and are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Link record creation and lookup
//! - [`HitRepository`] - Hit log appends and reads
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod hit_repository;
pub mod link_repository;

pub use hit_repository::HitRepository;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use hit_repository::MockHitRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
