//! Filesystem repository implementations.
//!
//! The storage directory is the database: one plain-text file per link, named
//! by its identifier. No in-memory index is needed for correctness.
//!
//! # Repositories
//!
//! - [`FsLinkRepository`] - Link record creation and lookup
//! - [`FsHitRepository`] - Hit log appends and reads
//! - [`StorageDir`] - Shared layout and per-identifier locks

pub mod fs_hit_repository;
pub mod fs_link_repository;
pub mod storage_dir;

pub use fs_hit_repository::FsHitRepository;
pub use fs_link_repository::FsLinkRepository;
pub use storage_dir::{StorageDir, UNIT_SUFFIX};
