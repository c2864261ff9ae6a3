//! Expired-Entry Sweep Task
//!
//! Background task that periodically removes expired cache entries,
//! independent of read traffic.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ResponseCache;

// == Sweep Handle ==
/// Handle to a running sweep task.
///
/// The task is cancelled either by calling [`stop`](Self::stop) or by
/// dropping the handle, so shutdown never leaves the timer running.
#[derive(Debug)]
pub struct SweepHandle {
    handle: JoinHandle<()>,
}

impl SweepHandle {
    /// Stops the sweep task.
    pub fn stop(self) {
        // Drop aborts
    }

    /// Returns true once the task has terminated.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for SweepHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// == Spawn Sweep Task ==
/// Spawns a background task that sweeps expired entries at the given
/// interval.
///
/// The loop sleeps between runs and takes the store's write lock only
/// for the sweep itself. Keys that are written once and never read
/// again would otherwise survive until eviction; the sweep bounds that
/// memory growth.
pub fn spawn_sweep_task<V>(cache: ResponseCache<V>, interval: Duration) -> SweepHandle
where
    V: Clone + Send + Sync + 'static,
{
    let handle = tokio::spawn(async move {
        info!("Starting expired-entry sweep task with interval {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.sweep_expired().await;

            if removed > 0 {
                info!("Sweep removed {} expired entries", removed);
            } else {
                debug!("Sweep found no expired entries");
            }
        }
    });

    SweepHandle { handle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CacheConfig;

    fn cache() -> ResponseCache<String> {
        ResponseCache::new(&CacheConfig {
            capacity: 100,
            default_ttl: Duration::from_secs(300),
            sweep_interval: Duration::from_millis(50),
        })
    }

    #[tokio::test]
    async fn test_sweep_task_removes_expired_entries() {
        let cache = cache();

        cache
            .set("expire_soon", "value".to_string(), Some(Duration::from_millis(30)))
            .await
            .unwrap();

        let handle = spawn_sweep_task(cache.clone(), Duration::from_millis(50));

        // Wait for the entry to expire and at least one sweep to run
        tokio::time::sleep(Duration::from_millis(120)).await;

        // keys() sees physical storage, so the sweep (not a lazy read)
        // must have removed the entry
        assert!(
            cache.keys().await.is_empty(),
            "Expired entry should have been swept"
        );

        handle.stop();
    }

    #[tokio::test]
    async fn test_sweep_task_preserves_live_entries() {
        let cache = cache();

        cache
            .set("long_lived", "value".to_string(), Some(Duration::from_secs(3600)))
            .await
            .unwrap();

        let handle = spawn_sweep_task(cache.clone(), Duration::from_millis(30));

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(
            cache.get("long_lived").await.unwrap(),
            Some("value".to_string())
        );

        handle.stop();
    }

    #[tokio::test]
    async fn test_sweep_task_stops_on_stop() {
        let cache = cache();

        let handle = spawn_sweep_task(cache, Duration::from_millis(30));
        handle.stop();
        // Handle consumed; the spawned task is aborted
    }

    #[tokio::test]
    async fn test_sweep_task_stops_on_drop() {
        let cache = cache();

        {
            let _handle = spawn_sweep_task(cache.clone(), Duration::from_millis(30));
        }

        // After the handle is dropped, no sweep runs: an expired entry
        // stays physically present until read
        cache
            .set("leftover", "value".to_string(), Some(Duration::from_millis(20)))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(cache.keys().await.len(), 1);
    }
}
