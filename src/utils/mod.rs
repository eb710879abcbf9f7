//! Utility functions for identifier derivation and request handling.
//!
//! - [`identifier`] - Content-addressed identifier derivation
//! - [`request`] - Client signature and path component extraction

pub mod identifier;
pub mod request;
