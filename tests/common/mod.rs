#![allow(dead_code)]

use link_analytics::infrastructure::cache::{self, NullCache};
use link_analytics::infrastructure::persistence::StorageDir;
use link_analytics::state::AppState;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

pub const BASE_URL: &str = "http://s.example.com";

/// Builds state over a fresh temporary data directory with caching disabled.
///
/// The returned `TempDir` must outlive the state.
pub fn create_test_state() -> (TempDir, AppState) {
    let tmp = tempfile::tempdir().unwrap();
    let storage = StorageDir::open(tmp.path()).unwrap();
    let state = AppState::new(storage, Arc::new(NullCache::new()), BASE_URL.to_string());

    (tmp, state)
}

/// Same as [`create_test_state`] with an in-memory destination cache.
pub fn create_cached_test_state(capacity: u64) -> (TempDir, AppState) {
    let tmp = tempfile::tempdir().unwrap();
    let storage = StorageDir::open(tmp.path()).unwrap();
    let state = AppState::new(storage, cache::from_capacity(capacity), BASE_URL.to_string());

    (tmp, state)
}

/// Registers a destination and returns its identifier.
pub async fn create_test_link(state: &AppState, destination: &str) -> String {
    state
        .link_service
        .register_destination(destination)
        .await
        .unwrap()
        .identifier
}

/// Reads the raw storage unit for an identifier.
pub fn read_unit(dir: &Path, identifier: &str) -> String {
    std::fs::read_to_string(dir.join(format!("{identifier}.linkanalytics"))).unwrap()
}
