//! No-op cache implementation for testing or disabled caching.

use super::service::CacheService;
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when `CACHE_CAPACITY=0`. Every lookup is a miss, so each visit reads
/// the storage unit from disk.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get_destination(&self, _identifier: &str) -> Option<String> {
        None
    }

    async fn set_destination(&self, _identifier: &str, _destination: &str) {}

    async fn invalidate(&self, _identifier: &str) {}

    async fn health_check(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}
