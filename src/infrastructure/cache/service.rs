//! Cache service trait and error types.

use async_trait::async_trait;

/// Read-through cache of identifier → destination.
///
/// Destinations never change once registered, so an entry stays valid for the
/// life of the process. The cache is a pure optimization: a miss always falls
/// back to the record store. Backends are in-process and cannot fail.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - bounded in-process cache
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the destination for an identifier.
    ///
    /// Returns `None` on a cache miss.
    async fn get_destination(&self, identifier: &str) -> Option<String>;

    /// Stores an identifier → destination mapping.
    async fn set_destination(&self, identifier: &str, destination: &str);

    /// Removes a cached mapping.
    ///
    /// Called when a cached identifier turns out to have no storage unit.
    async fn invalidate(&self, identifier: &str);

    /// Checks if the cache backend is healthy.
    ///
    /// Used by the health endpoint to report cache status.
    async fn health_check(&self) -> bool;

    /// Short human-readable backend name for logs and health output.
    fn name(&self) -> &'static str;
}
