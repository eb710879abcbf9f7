//! Filesystem implementation of link repository.

use async_trait::async_trait;
use serde_json::json;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::storage_dir::{StorageDir, run_blocking};
use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::identifier::{IdentifierDeriver, Sha256Deriver};

/// Filesystem repository for link records.
///
/// Each link is one file named after its identifier whose first line is the
/// destination. Records are created with create-new semantics and never
/// rewritten.
pub struct FsLinkRepository {
    storage: StorageDir,
    deriver: Arc<dyn IdentifierDeriver>,
}

impl FsLinkRepository {
    /// Creates a repository using the default SHA-256 deriver.
    pub fn new(storage: StorageDir) -> Self {
        Self::with_deriver(storage, Arc::new(Sha256Deriver))
    }

    /// Creates a repository with a custom identifier deriver.
    pub fn with_deriver(storage: StorageDir, deriver: Arc<dyn IdentifierDeriver>) -> Self {
        Self { storage, deriver }
    }
}

#[async_trait]
impl LinkRepository for FsLinkRepository {
    async fn create(&self, destination: &str) -> Result<Link, AppError> {
        validate_destination(destination)?;

        let identifier = self.deriver.derive(destination);
        let path = self.storage.unit_path(&identifier)?;
        let _guard = self.storage.lock(&identifier).await;

        let header = format!("{destination}\n");
        let write_path = path.clone();
        let created = run_blocking(&identifier, move || {
            write_new_unit(&write_path, header.as_bytes())
        })
        .await?;

        if created {
            info!("Registered link {} -> {}", identifier, destination);
            return Ok(Link::new(identifier, destination.to_string()));
        }

        debug!("Link {} already registered", identifier);

        let existing = run_blocking(&identifier, move || read_destination(&path)).await?;
        if existing != destination {
            warn!(
                "Identifier {} is stored with a different destination",
                identifier
            );
            return Err(AppError::storage(
                "Stored destination does not match identifier",
                json!({ "identifier": identifier }),
            ));
        }

        Ok(Link::new(identifier, existing))
    }

    async fn load(&self, identifier: &str) -> Result<Link, AppError> {
        let path = self.storage.unit_path(identifier)?;
        let _guard = self.storage.lock(identifier).await;

        let destination = run_blocking(identifier, move || read_destination(&path)).await?;

        Ok(Link::new(identifier.to_string(), destination))
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let root = self.storage.root().to_path_buf();

        let mut identifiers = run_blocking("*", move || {
            let mut identifiers = Vec::new();

            for entry in fs::read_dir(&root)? {
                let file_name = entry?.file_name();
                if let Some(identifier) = file_name
                    .to_str()
                    .and_then(StorageDir::identifier_from_file_name)
                {
                    identifiers.push(identifier.to_string());
                }
            }

            Ok(identifiers)
        })
        .await?;
        identifiers.sort();

        // Each header is read under its unit's lock so an in-flight create
        // is observed complete.
        let mut links = Vec::with_capacity(identifiers.len());
        for identifier in identifiers {
            match self.load(&identifier).await {
                Ok(link) => links.push(link),
                Err(e) => warn!("Skipping unreadable link {}: {}", identifier, e),
            }
        }

        Ok(links)
    }
}

/// Rejects destinations that cannot be stored as a single header line.
fn validate_destination(destination: &str) -> Result<(), AppError> {
    if destination.is_empty() {
        return Err(AppError::bad_request(
            "Destination must not be empty",
            json!({}),
        ));
    }

    if destination.contains(['\r', '\n']) {
        return Err(AppError::bad_request(
            "Destination must be a single line",
            json!({ "destination": destination }),
        ));
    }

    Ok(())
}

/// Creates the unit and writes its header. Returns `false` if it already exists.
fn write_new_unit(path: &Path, header: &[u8]) -> io::Result<bool> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(e),
    };

    if let Err(e) = file.write_all(header).and_then(|_| file.sync_data()) {
        drop(file);
        let _ = fs::remove_file(path);
        return Err(e);
    }

    Ok(true)
}

/// Reads the destination from the first line of a unit.
fn read_destination(path: &Path) -> io::Result<String> {
    let file = File::open(path)?;
    let mut line = String::new();
    BufReader::new(file).read_line(&mut line)?;

    match line.strip_suffix('\n') {
        Some(destination) if !destination.is_empty() => Ok(destination.to_string()),
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "missing or truncated destination line",
        )),
    }
}
