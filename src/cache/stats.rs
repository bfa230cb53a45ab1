//! Cache Statistics Module
//!
//! Tracks per-store performance counters: hits, misses, puts, removals and
//! lazily-discovered expirations.

use serde::Serialize;

// == Cache Stats ==
/// Counter block for a single cache store.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of reads satisfied by a live entry
    pub hits: u64,
    /// Number of reads that found nothing live
    pub misses: u64,
    /// Number of writes
    pub puts: u64,
    /// Number of explicit removals of present entries
    pub removals: u64,
    /// Number of entries evicted after being found stale
    pub expired: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the hit rate as a percentage.
    ///
    /// Returns `hits / (hits + misses) * 100`, or 0.0 if no reads have been
    /// made. Always recomputed from the counters, never stored.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64 * 100.0
        }
    }

    // == Total Requests ==
    /// Returns the number of read attempts (hits plus misses).
    pub fn total_requests(&self) -> u64 {
        self.hits + self.misses
    }

    // == Recorders ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Increments the put counter.
    pub fn record_put(&mut self) {
        self.puts += 1;
    }

    /// Increments the removal counter.
    pub fn record_removal(&mut self) {
        self.removals += 1;
    }

    /// Adds to the expired counter.
    pub fn record_expired(&mut self, count: u64) {
        self.expired += count;
    }

    // == Reset ==
    /// Resets all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// == Stats Snapshot ==
/// Point-in-time statistics report for a single store.
///
/// Unlike [`CacheStats`], which is the live counter block, a snapshot also
/// carries the derived hit rate, the live entry count after a fresh sweep and
/// the store's configured TTL.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub puts: u64,
    pub removals: u64,
    pub expired: u64,
    /// Hit rate percentage, recomputed from the counters
    pub hit_rate: f64,
    /// Total read attempts (hits + misses)
    pub total_requests: u64,
    /// Live entries after sweeping stale ones
    pub current_size: usize,
    /// Configured TTL in milliseconds
    pub ttl_ms: u64,
}

impl StatsSnapshot {
    /// Builds a snapshot from a counter block, a swept entry count and the
    /// store's TTL.
    pub fn new(stats: &CacheStats, current_size: usize, ttl: std::time::Duration) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            puts: stats.puts,
            removals: stats.removals,
            expired: stats.expired,
            hit_rate: stats.hit_rate(),
            total_requests: stats.total_requests(),
            current_size,
            ttl_ms: u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX),
        }
    }
}
