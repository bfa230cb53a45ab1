//! Cache Entry Module
//!
//! Defines the structure of a single stored value with its insertion time.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A stored value stamped with its insertion time.
///
/// Entries are immutable once created; a write always replaces the whole
/// entry. The owning store decides liveness by comparing the entry's age
/// against its per-instance TTL.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Monotonic timestamp taken at insertion
    pub inserted_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: V) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived the given TTL.
    ///
    /// Boundary condition: an entry is live while `age < ttl` and expired
    /// once `age >= ttl`, so an entry is expired the moment the full TTL
    /// duration has elapsed.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.inserted_at.elapsed() >= ttl
    }

    // == Age ==
    /// Returns the time elapsed since insertion.
    pub fn age(&self) -> Duration {
        self.inserted_at.elapsed()
    }

    // == Remaining TTL ==
    /// Returns the time left before this entry expires under the given TTL,
    /// or zero if it already has.
    pub fn ttl_remaining(&self, ttl: Duration) -> Duration {
        ttl.saturating_sub(self.inserted_at.elapsed())
    }
}
