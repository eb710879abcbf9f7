//! # Link Analytics
//!
//! A content-addressed URL shortener that logs every hit, built with Axum.
//!
//! A destination URL is hashed into a 64-character hex identifier. The
//! identifier names one file in the data directory whose first line is the
//! destination and whose following lines are the recorded hits.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities, repository traits, keyed locks
//! - **Application Layer** ([`application`]) - Registration, visits and analytics
//! - **Infrastructure Layer** ([`infrastructure`]) - File storage and destination cache
//! - **API Layer** ([`api`]) - JSON API and link-following handlers
//! - **Web Layer** ([`web`]) - HTML creation form and analytics page
//!
//! ## Quick Start
//!
//! ```bash
//! export DATA_DIR="./data"
//! cargo run
//!
//! curl -X POST localhost:8080/api/links \
//!   -H 'Content-Type: application/json' \
//!   -d '{"destination":"https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Hit, Link, LinkAnalytics};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
