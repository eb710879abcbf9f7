//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls and caching, and provide a clean API
//! for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Registration, visits and analytics

pub mod services;
