//! In-process cache backed by `moka`.

use super::service::CacheService;
use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

/// Bounded in-memory cache of identifier → destination.
///
/// Entries are evicted by size only. Destinations are immutable, so no TTL
/// is needed for correctness.
pub struct MemoryCache {
    inner: Cache<String, String>,
}

impl MemoryCache {
    /// Creates a cache holding at most `capacity` entries.
    pub fn new(capacity: u64) -> Self {
        debug!("Using MemoryCache (capacity {})", capacity);
        let inner = Cache::builder().max_capacity(capacity).build();
        Self { inner }
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_destination(&self, identifier: &str) -> Option<String> {
        self.inner.get(identifier).await
    }

    async fn set_destination(&self, identifier: &str, destination: &str) {
        self.inner
            .insert(identifier.to_string(), destination.to_string())
            .await;
    }

    async fn invalidate(&self, identifier: &str) {
        self.inner.invalidate(identifier).await;
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
