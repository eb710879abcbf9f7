//! Filesystem implementation of the hit log.

use async_trait::async_trait;
use std::fs::{self, OpenOptions};
use std::io::Write;

use super::storage_dir::{StorageDir, run_blocking};
use crate::domain::entities::Hit;
use crate::domain::repositories::HitRepository;
use crate::error::AppError;

/// Appends hit lines to existing storage units.
///
/// Every append and read holds the unit's keyed lock, so concurrent visits to
/// one link are written as whole lines in lock-acquisition order.
pub struct FsHitRepository {
    storage: StorageDir,
}

impl FsHitRepository {
    pub fn new(storage: StorageDir) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl HitRepository for FsHitRepository {
    async fn append(&self, identifier: &str, client_signature: &str) -> Result<Hit, AppError> {
        let path = self.storage.unit_path(identifier)?;
        let _guard = self.storage.lock(identifier).await;

        let hit = Hit::now(client_signature);
        let line = hit.to_line();

        run_blocking(identifier, move || {
            // Append-only and never create: a missing unit means an unknown link.
            let mut file = OpenOptions::new().append(true).open(&path)?;
            file.write_all(line.as_bytes())
        })
        .await?;

        tracing::debug!("Recorded hit on {}", identifier);
        Ok(hit)
    }

    async fn read_all(&self, identifier: &str) -> Result<Vec<u8>, AppError> {
        let path = self.storage.unit_path(identifier)?;
        let _guard = self.storage.lock(identifier).await;

        run_blocking(identifier, move || fs::read(&path)).await
    }
}
