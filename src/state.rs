//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::{FsHitRepository, FsLinkRepository, StorageDir};

/// Link service wired to the filesystem repositories.
pub type FsLinkService = LinkService<FsLinkRepository, FsHitRepository>;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<FsLinkService>,
    pub storage: StorageDir,
    pub cache: Arc<dyn CacheService>,
    /// Public base URL used to build short and analytics links.
    pub base_url: String,
}

impl AppState {
    /// Builds the repositories and services over one storage directory.
    ///
    /// Both repositories share the directory's keyed locks.
    pub fn new(storage: StorageDir, cache: Arc<dyn CacheService>, base_url: String) -> Self {
        let link_repository = Arc::new(FsLinkRepository::new(storage.clone()));
        let hit_repository = Arc::new(FsHitRepository::new(storage.clone()));
        let link_service = Arc::new(LinkService::new(
            link_repository,
            hit_repository,
            cache.clone(),
        ));

        Self {
            link_service,
            storage,
            cache,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL that redirects to the link's destination.
    pub fn short_url(&self, identifier: &str) -> String {
        format!("{}/go/{}", self.base_url, identifier)
    }

    /// Absolute URL that records a hit without redirecting.
    pub fn collect_url(&self, identifier: &str) -> String {
        format!("{}/collect/{}", self.base_url, identifier)
    }

    /// Absolute URL of the link's analytics page.
    pub fn analytics_url(&self, identifier: &str) -> String {
        format!("{}/analytics/{}", self.base_url, identifier)
    }
}
