//! Cache Sweep Task
//!
//! Background task that periodically sweeps stale entries out of all four
//! catalog indexes. Lazy per-access expiration remains the correctness
//! mechanism; the sweep only bounds how long garbage lingers between
//! accesses.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CatalogCache;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// # Arguments
/// * `cache` - Shared reference to the catalog cache coordinator
/// * `sweep_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_sweep_task(cache: Arc<CatalogCache>, sweep_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting cache sweep task with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            let removed = cache.clean_expired().await;

            if removed > 0 {
                info!("Cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Cache sweep: no expired entries found");
            }
        }
    })
}
