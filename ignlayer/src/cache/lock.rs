//! Per-key mutual exclusion for tile production.
//!
//! Every tile key maps to its own mutex, created on first use and kept for
//! the lifetime of the registry. Requests for the same key serialize; requests
//! for different keys never contend.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::{Mutex, RawMutex};
use tracing::trace;

use crate::tile::TileKey;

/// Exclusive access to one tile key, released on drop.
pub struct TileLockGuard {
    key: TileKey,
    _guard: parking_lot::lock_api::ArcMutexGuard<RawMutex, ()>,
}

impl TileLockGuard {
    /// The key this guard holds.
    pub fn key(&self) -> &TileKey {
        &self.key
    }
}

impl Drop for TileLockGuard {
    fn drop(&mut self) {
        trace!(key = %self.key, "tile lock released");
    }
}

/// Registry of per-key locks.
///
/// Entries are created atomically through the map's entry API, so two
/// threads racing on a fresh key always end up sharing one mutex. Entries are
/// never removed: the registry grows with the number of distinct keys touched
/// during the process lifetime.
#[derive(Default)]
pub struct TileKeyLock {
    locks: DashMap<TileKey, Arc<Mutex<()>>>,
}

impl TileKeyLock {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Block until the caller holds exclusive access to `key`.
    ///
    /// Waiting has no timeout. The underlying mutex is eventually fair, so a
    /// waiter cannot be starved by a stream of later arrivals.
    pub fn acquire(&self, key: &TileKey) -> TileLockGuard {
        // Clone the Arc out of the map before blocking so the shard lock is
        // not held while waiting.
        let mutex = self
            .locks
            .entry(*key)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();

        let guard = mutex.lock_arc();
        trace!(key = %key, "tile lock acquired");
        TileLockGuard { key: *key, _guard: guard }
    }

    /// Relinquish access held by `guard`. Equivalent to dropping it.
    pub fn release(&self, guard: TileLockGuard) {
        drop(guard);
    }

    /// Number of keys that have ever been locked.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    /// Whether no key has been locked yet.
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
