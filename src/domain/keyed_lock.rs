//! Per-identifier asynchronous mutual exclusion.
//!
//! Writers to the same storage unit are serialized through a lock keyed by
//! identifier. Locks are created on first use and dropped from the map once
//! the last guard for a key is released, so the map only holds keys that are
//! currently contended.

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

type LockMap = DashMap<String, Arc<Mutex<()>>>;

/// A map from key to lock, shared by every repository touching the same
/// storage directory.
#[derive(Debug, Clone, Default)]
pub struct KeyedLocks {
    locks: Arc<LockMap>,
}

impl KeyedLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `key`.
    ///
    /// The returned guard is built before waiting, so dropping this future
    /// mid-wait still releases the map entry.
    pub async fn lock(&self, key: &str) -> KeyedLockGuard {
        let mutex = self
            .locks
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();

        let mut held = KeyedLockGuard {
            key: key.to_string(),
            locks: self.locks.clone(),
            mutex: Some(mutex.clone()),
            guard: None,
        };

        held.guard = Some(mutex.lock_owned().await);
        held
    }

    /// Number of keys currently held or awaited.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

/// Holds the lock for one key until dropped.
#[derive(Debug)]
pub struct KeyedLockGuard {
    key: String,
    locks: Arc<LockMap>,
    mutex: Option<Arc<Mutex<()>>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for KeyedLockGuard {
    fn drop(&mut self) {
        // Release first so the map's Arc is the last one if nobody is waiting.
        drop(self.guard.take());
        drop(self.mutex.take());
        self.locks
            .remove_if(&self.key, |_, mutex| Arc::strong_count(mutex) == 1);
    }
}
