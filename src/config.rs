//! Configuration Module
//!
//! Handles loading and managing service configuration from environment
//! variables.

use std::env;
use std::time::Duration;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults. TTLs are per index: list snapshots go stale faster than single
/// products, and search results fastest of all.
#[derive(Debug, Clone)]
pub struct Config {
    /// TTL for the product-by-id index, in seconds
    pub product_ttl: u64,
    /// TTL for the category list index, in seconds
    pub category_ttl: u64,
    /// TTL for the brand list index, in seconds
    pub brand_ttl: u64,
    /// TTL for the search result index, in seconds
    pub search_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background sweep interval in seconds
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PRODUCT_TTL` - Product index TTL in seconds (default: 600)
    /// - `CATEGORY_TTL` - Category index TTL in seconds (default: 300)
    /// - `BRAND_TTL` - Brand index TTL in seconds (default: 300)
    /// - `SEARCH_TTL` - Search index TTL in seconds (default: 120)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds (default: 60,
    ///   minimum: 1)
    pub fn from_env() -> Self {
        Self {
            product_ttl: env_or("PRODUCT_TTL", 600),
            category_ttl: env_or("CATEGORY_TTL", 300),
            brand_ttl: env_or("BRAND_TTL", 300),
            search_ttl: env_or("SEARCH_TTL", 120),
            server_port: env_or("SERVER_PORT", 3000),
            // A zero interval would make the sweep task spin without sleeping
            sweep_interval: env_or("SWEEP_INTERVAL", 60).max(1),
        }
    }

    /// Product index TTL as a Duration.
    pub fn product_ttl(&self) -> Duration {
        Duration::from_secs(self.product_ttl)
    }

    /// Category index TTL as a Duration.
    pub fn category_ttl(&self) -> Duration {
        Duration::from_secs(self.category_ttl)
    }

    /// Brand index TTL as a Duration.
    pub fn brand_ttl(&self) -> Duration {
        Duration::from_secs(self.brand_ttl)
    }

    /// Search index TTL as a Duration.
    pub fn search_ttl(&self) -> Duration {
        Duration::from_secs(self.search_ttl)
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            product_ttl: 600,
            category_ttl: 300,
            brand_ttl: 300,
            search_ttl: 120,
            server_port: 3000,
            sweep_interval: 60,
        }
    }
}
