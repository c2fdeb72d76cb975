//! Synthesis counters.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free counters updated while resolving tiles.
#[derive(Debug, Default)]
pub struct PyramidStats {
    cache_hits: AtomicU64,
    fetches: AtomicU64,
    fetch_failures: AtomicU64,
    syntheses: AtomicU64,
    placeholders: AtomicU64,
    store_write_failures: AtomicU64,
}

impl PyramidStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_fetch(&self) {
        self.fetches.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_fetch_failure(&self) {
        self.fetch_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_synthesis(&self) {
        self.syntheses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_placeholder(&self) {
        self.placeholders.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_store_write_failure(&self) {
        self.store_write_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of all counters.
    pub fn snapshot(&self) -> PyramidStatsSnapshot {
        PyramidStatsSnapshot {
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            fetches: self.fetches.load(Ordering::Relaxed),
            fetch_failures: self.fetch_failures.load(Ordering::Relaxed),
            syntheses: self.syntheses.load(Ordering::Relaxed),
            placeholders: self.placeholders.load(Ordering::Relaxed),
            store_write_failures: self.store_write_failures.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of [`PyramidStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PyramidStatsSnapshot {
    /// Tiles served from the store
    pub cache_hits: u64,
    /// Successful upstream fetches
    pub fetches: u64,
    /// Failed upstream fetches
    pub fetch_failures: u64,
    /// Tiles built by compositing or cropping
    pub syntheses: u64,
    /// Placeholder tiles served
    pub placeholders: u64,
    /// Tiles that could not be written to the store
    pub store_write_failures: u64,
}

impl fmt::Display for PyramidStatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits={} fetches={} fetch_failures={} syntheses={} placeholders={} write_failures={}",
            self.cache_hits,
            self.fetches,
            self.fetch_failures,
            self.syntheses,
            self.placeholders,
            self.store_write_failures
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let stats = PyramidStats::new();
        stats.record_cache_hit();
        stats.record_cache_hit();
        stats.record_fetch();
        stats.record_synthesis();
        stats.record_placeholder();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.cache_hits, 2);
        assert_eq!(snapshot.fetches, 1);
        assert_eq!(snapshot.fetch_failures, 0);
        assert_eq!(snapshot.syntheses, 1);
        assert_eq!(snapshot.placeholders, 1);
        assert_eq!(snapshot.store_write_failures, 0);
    }

    #[test]
    fn test_display() {
        let snapshot = PyramidStatsSnapshot {
            fetches: 3,
            ..Default::default()
        };
        assert_eq!(
            snapshot.to_string(),
            "hits=0 fetches=3 fetch_failures=0 syntheses=0 placeholders=0 write_failures=0"
        );
    }
}
