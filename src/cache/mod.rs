//! Cache Module
//!
//! The expiring key-value store and the catalog coordinator built on top of
//! it. Expiration is lazy with an optional full sweep; there is no
//! background timer inside the stores themselves.

mod coordinator;
mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use coordinator::{normalize_key, CatalogCache, CatalogCacheStats};
pub use entry::CacheEntry;
pub use stats::{CacheStats, StatsSnapshot};
pub use store::{CacheKey, TtlCache};
