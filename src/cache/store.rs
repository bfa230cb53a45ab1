//! Cache Store Module
//!
//! Generic expiring key-value store: HashMap storage, one TTL per instance,
//! lazy expiration with an optional full sweep, and a counter block.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, StatsSnapshot};
use crate::error::{CacheError, Result};

// == Cache Key Trait ==
/// Keys usable in a [`TtlCache`].
///
/// `is_nil` identifies the type's "unset" value: zero for integer ids, empty
/// (after trimming) for strings. A nil key on a write is rejected to catch
/// caller bugs early; on a read it degrades to an ordinary miss because
/// upstream callers may legitimately pass an unset dimension.
pub trait CacheKey: Eq + Hash + Clone {
    fn is_nil(&self) -> bool;
}

impl CacheKey for u64 {
    fn is_nil(&self) -> bool {
        *self == 0
    }
}

impl CacheKey for i64 {
    fn is_nil(&self) -> bool {
        *self == 0
    }
}

impl CacheKey for String {
    fn is_nil(&self) -> bool {
        self.trim().is_empty()
    }
}

// == TTL Cache ==
/// Expiring key-value store with lazy expiration.
///
/// Staleness is detected when an entry is accessed or during an explicit
/// sweep; there is no background timer inside the store itself. This trades
/// a little memory bloat between accesses for zero thread cost, which suits
/// a small, request-driven, in-process cache.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// Time-to-live applied to every entry in this store
    ttl: Duration,
    /// Performance counters
    stats: CacheStats,
}

impl<K: CacheKey, V: Clone> TtlCache<K, V> {
    // == Constructor ==
    /// Creates an empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            stats: CacheStats::new(),
        }
    }

    // == Put ==
    /// Stores a value under `key`, replacing any existing entry and stamping
    /// a fresh insertion time.
    ///
    /// Fails fast on a nil/zero key: writing under an unset key is always a
    /// caller bug, never a legitimate request.
    pub fn put(&mut self, key: K, value: V) -> Result<()> {
        if key.is_nil() {
            return Err(CacheError::InvalidKey(
                "Cannot cache under a nil key".to_string(),
            ));
        }

        self.entries.insert(key, CacheEntry::new(value));
        self.stats.record_put();
        Ok(())
    }

    // == Get ==
    /// Retrieves a live value by key.
    ///
    /// Returns `None` for nil keys, absent keys and stale entries. A stale
    /// entry found here is removed as a side effect and counted under
    /// `expired` in addition to `misses`, so no entry is ever both present
    /// and reported as a miss twice.
    pub fn get(&mut self, key: &K) -> Option<V> {
        if key.is_nil() {
            self.stats.record_miss();
            return None;
        }

        match self.entries.get(key) {
            Some(entry) if entry.is_expired(self.ttl) => {
                self.entries.remove(key);
                self.stats.record_expired(1);
                self.stats.record_miss();
                None
            }
            Some(entry) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Remove ==
    /// Deletes the entry if present; a no-op for absent or nil keys.
    ///
    /// `removals` counts only entries that were actually deleted.
    pub fn remove(&mut self, key: &K) {
        if key.is_nil() {
            return;
        }
        if self.entries.remove(key).is_some() {
            self.stats.record_removal();
        }
    }

    // == Contains Key ==
    /// Checks whether a live entry exists for `key`.
    ///
    /// Same liveness semantics as `get`: a stale entry discovered here is
    /// evicted and counted under `expired`. Presence probes do not touch the
    /// hit/miss counters.
    pub fn contains_key(&mut self, key: &K) -> bool {
        if key.is_nil() {
            return false;
        }

        match self.entries.get(key) {
            Some(entry) if entry.is_expired(self.ttl) => {
                self.entries.remove(key);
                self.stats.record_expired(1);
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    // == Clear ==
    /// Empties the store and resets every counter to zero.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.reset();
    }

    // == Clean Expired ==
    /// Sweeps the whole store, removing every stale entry.
    ///
    /// Returns the number of entries removed; each is counted under
    /// `expired`.
    pub fn clean_expired(&mut self) -> usize {
        let stale_keys: Vec<K> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(self.ttl))
            .map(|(key, _)| key.clone())
            .collect();

        let count = stale_keys.len();
        for key in stale_keys {
            self.entries.remove(&key);
        }

        self.stats.record_expired(count as u64);
        count
    }

    // == Size ==
    /// Sweeps stale entries, then returns the live entry count.
    ///
    /// O(n) with a side effect: the reported size is never inflated by
    /// garbage awaiting lazy eviction.
    pub fn size(&mut self) -> usize {
        self.clean_expired();
        self.entries.len()
    }

    // == Stats ==
    /// Returns a statistics snapshot with a freshly swept entry count.
    pub fn stats(&mut self) -> StatsSnapshot {
        let current_size = self.size();
        StatsSnapshot::new(&self.stats, current_size, self.ttl)
    }

    // == TTL ==
    /// Returns the store's configured TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Raw Length ==
    /// Returns the raw entry count, stale entries included. Test helper;
    /// `size()` is the swept variant.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries at all.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
