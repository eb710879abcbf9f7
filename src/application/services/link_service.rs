//! Link registration, visit and analytics service.

use std::sync::Arc;

use crate::domain::entities::{Link, LinkAnalytics};
use crate::domain::repositories::{HitRepository, LinkRepository};
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use tracing::{debug, info, warn};

/// Service composing the record store, the hit log and the destination cache.
///
/// Each link is either unregistered (no storage unit) or registered; only
/// [`Self::register_destination`] is valid in the first state and the
/// transition happens once.
pub struct LinkService<L: LinkRepository, H: HitRepository> {
    link_repository: Arc<L>,
    hit_repository: Arc<H>,
    cache: Arc<dyn CacheService>,
}

impl<L: LinkRepository, H: HitRepository> LinkService<L, H> {
    /// Creates a new link service.
    pub fn new(
        link_repository: Arc<L>,
        hit_repository: Arc<H>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            link_repository,
            hit_repository,
            cache,
        }
    }

    /// Registers a destination and returns its link.
    ///
    /// The destination is expected to be trimmed already. Registering the same
    /// destination twice returns the same identifier and keeps its history.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty or multi-line destination.
    /// Returns [`AppError::Storage`] on I/O errors.
    pub async fn register_destination(&self, destination: &str) -> Result<Link, AppError> {
        let link = self.link_repository.create(destination).await?;
        info!("Destination available as {}", link.identifier);
        Ok(link)
    }

    /// Records a hit and returns the destination to redirect to.
    ///
    /// Backs both the redirecting and the collect-only flows; they differ only
    /// in what the HTTP layer does with the returned destination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the identifier was never registered.
    /// Returns [`AppError::Storage`] if the hit cannot be written.
    pub async fn visit(
        &self,
        identifier: &str,
        client_signature: &str,
    ) -> Result<String, AppError> {
        let destination = self.resolve(identifier).await?;

        match self.hit_repository.append(identifier, client_signature).await {
            Ok(_) => Ok(destination),
            Err(e @ AppError::NotFound { .. }) => {
                warn!("Link {} vanished from storage, dropping cache entry", identifier);
                self.cache.invalidate(identifier).await;
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Returns a link with its full raw hit history.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the identifier was never registered.
    /// Returns [`AppError::Storage`] on I/O errors.
    pub async fn get_analytics(&self, identifier: &str) -> Result<LinkAnalytics, AppError> {
        let link = self.link_repository.load(identifier).await?;
        let history = self.hit_repository.read_all(identifier).await?;
        Ok(LinkAnalytics::new(link, history))
    }

    /// Lists every registered link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the store cannot be enumerated.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Looks up the destination, consulting the cache first.
    async fn resolve(&self, identifier: &str) -> Result<String, AppError> {
        if let Some(destination) = self.cache.get_destination(identifier).await {
            debug!("Cache HIT for {}", identifier);
            return Ok(destination);
        }
        debug!("Cache MISS for {}", identifier);

        let link = self.link_repository.load(identifier).await?;
        self.cache
            .set_destination(&link.identifier, &link.destination)
            .await;

        Ok(link.destination)
    }
}
