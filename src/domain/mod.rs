//! Domain layer containing business entities and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`keyed_lock`] - Per-identifier mutual exclusion for storage writers
//!
//! # Visit Flow
//!
//! 1. HTTP handler receives `/go/{id}` or `/collect/{id}`
//! 2. [`crate::application::services::LinkService::visit`] resolves the destination
//! 3. A [`entities::Hit`] is appended via [`repositories::HitRepository`]
//! 4. The handler redirects or acknowledges

pub mod entities;
pub mod keyed_lock;
pub mod repositories;
