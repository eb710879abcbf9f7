//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without storage concerns.
//!
//! # Entity Types
//!
//! - [`Link`] - A destination and its derived identifier
//! - [`Hit`] - A recorded visit to a link
//! - [`LinkAnalytics`] - A link with its raw hit history

pub mod analytics;
pub mod hit;
pub mod link;

pub use analytics::LinkAnalytics;
pub use hit::{Hit, TIMESTAMP_FORMAT};
pub use link::Link;
