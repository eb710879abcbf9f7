//! Caching layer for destination lookups.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`MemoryCache`] - Bounded in-process cache
//! - [`NullCache`] - No-op implementation for testing/disabled caching

mod memory_cache;
mod null_cache;
mod service;

pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use service::CacheService;

use std::sync::Arc;

/// Builds the cache selected by configuration; a capacity of zero disables it.
pub fn from_capacity(capacity: u64) -> Arc<dyn CacheService> {
    if capacity == 0 {
        Arc::new(NullCache::new())
    } else {
        Arc::new(MemoryCache::new(capacity))
    }
}
