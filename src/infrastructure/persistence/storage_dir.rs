//! On-disk layout shared by the filesystem repositories.
//!
//! ```text
//! data_dir/
//! ├── {identifier}.linkanalytics    ← destination line, then hit lines
//! └── ...
//! ```

use serde_json::json;
use std::io;
use std::path::{Path, PathBuf};
use tokio::task;

use crate::domain::keyed_lock::{KeyedLockGuard, KeyedLocks};
use crate::error::{AppError, map_io_error};
use crate::utils::identifier::is_well_formed;

/// File name suffix of every storage unit.
pub const UNIT_SUFFIX: &str = ".linkanalytics";

/// Root directory holding one storage unit per link.
///
/// Cloning is cheap; clones share the same per-identifier locks, so every
/// repository built from one `StorageDir` serializes writes to a unit.
#[derive(Debug, Clone)]
pub struct StorageDir {
    root: PathBuf,
    locks: KeyedLocks,
}

impl StorageDir {
    /// Opens the storage directory, creating it if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;

        Ok(Self {
            root,
            locks: KeyedLocks::new(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the storage unit for `identifier`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for identifiers that no deriver could
    /// have produced; such a unit can never exist.
    pub fn unit_path(&self, identifier: &str) -> Result<PathBuf, AppError> {
        if !is_well_formed(identifier) {
            tracing::debug!("Rejected malformed identifier {:?}", identifier);
            return Err(AppError::not_found(
                "Link not found",
                json!({ "identifier": identifier }),
            ));
        }

        Ok(self.root.join(format!("{identifier}{UNIT_SUFFIX}")))
    }

    /// Extracts the identifier from a storage unit file name.
    pub fn identifier_from_file_name(file_name: &str) -> Option<&str> {
        file_name
            .strip_suffix(UNIT_SUFFIX)
            .filter(|identifier| is_well_formed(identifier))
    }

    /// Acquires the exclusive lock for one storage unit.
    pub async fn lock(&self, identifier: &str) -> KeyedLockGuard {
        self.locks.lock(identifier).await
    }

    /// Returns `true` if the root exists, is a directory and is writable.
    pub async fn health_check(&self) -> bool {
        let root = self.root.clone();
        task::spawn_blocking(move || {
            std::fs::metadata(root)
                .map(|m| m.is_dir() && !m.permissions().readonly())
                .unwrap_or(false)
        })
        .await
        .unwrap_or(false)
    }
}

/// Runs blocking file I/O off the async runtime.
///
/// The closure owns every file handle it opens, so handles are closed on all
/// exit paths before the result is returned.
pub(crate) async fn run_blocking<T, F>(identifier: &str, f: F) -> Result<T, AppError>
where
    F: FnOnce() -> io::Result<T> + Send + 'static,
    T: Send + 'static,
{
    match task::spawn_blocking(f).await {
        Ok(result) => result.map_err(|e| map_io_error(e, identifier)),
        Err(e) => {
            tracing::error!("Storage task for {} failed: {}", identifier, e);
            Err(AppError::storage(
                "Storage task failed",
                json!({ "identifier": identifier, "reason": e.to_string() }),
            ))
        }
    }
}
