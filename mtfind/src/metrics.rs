use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Tracks scan volume and matcher-cache performance for one or more searches
#[derive(Debug, Clone)]
pub struct SearchMetrics {
    bytes_scanned: Arc<AtomicU64>,
    partitions_scanned: Arc<AtomicU64>,
    cache_hits: Arc<AtomicU64>,
    cache_misses: Arc<AtomicU64>,
}

impl SearchMetrics {
    /// Creates a new SearchMetrics instance
    pub fn new() -> Self {
        Self {
            bytes_scanned: Arc::new(AtomicU64::new(0)),
            partitions_scanned: Arc::new(AtomicU64::new(0)),
            cache_hits: Arc::new(AtomicU64::new(0)),
            cache_misses: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Records one partition scan of `bytes` bytes
    pub fn record_partition_scan(&self, bytes: u64) {
        self.partitions_scanned.fetch_add(1, Ordering::Relaxed);
        self.bytes_scanned.fetch_add(bytes, Ordering::Relaxed);
    }

    /// Records a matcher cache lookup
    pub fn record_cache_operation(&self, hit: bool) {
        if hit {
            self.cache_hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.cache_misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn cache_hits(&self) -> u64 {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn cache_misses(&self) -> u64 {
        self.cache_misses.load(Ordering::Relaxed)
    }

    /// Gets current scan statistics
    pub fn get_stats(&self) -> SearchStats {
        SearchStats {
            bytes_scanned: self.bytes_scanned.load(Ordering::Relaxed),
            partitions_scanned: self.partitions_scanned.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
        }
    }

    /// Logs current scan statistics
    pub fn log_stats(&self) {
        let stats = self.get_stats();
        debug!(
            "Scan stats: {} bytes in {} partitions, matcher cache hits/misses: {}/{}",
            stats.bytes_scanned, stats.partitions_scanned, stats.cache_hits, stats.cache_misses
        );
    }
}

impl Default for SearchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about scan volume and cache behavior
#[derive(Debug, Clone, Copy)]
pub struct SearchStats {
    pub bytes_scanned: u64,
    pub partitions_scanned: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
}
