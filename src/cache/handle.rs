//! Cache Handle Module
//!
//! Cloneable async handle over a [`CacheStore`], plus the cache-aside
//! (read-through) helper used by request handlers.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::config::CacheConfig;
use crate::error::{ComputeError, Result};

// == Response Cache ==
/// Shared handle to a cache store.
///
/// Wraps the store in `Arc<RwLock<_>>` so one instance can be
/// constructed at startup and passed to every consumer explicitly -
/// tests create isolated instances instead of sharing process-wide
/// state. Cloning the handle shares the underlying store.
#[derive(Debug)]
pub struct ResponseCache<V> {
    store: Arc<RwLock<CacheStore<V>>>,
}

impl<V> Clone for ResponseCache<V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<V: Clone> ResponseCache<V> {
    // == Constructors ==
    /// Creates a cache from a [`CacheConfig`].
    pub fn new(config: &CacheConfig) -> Self {
        Self::from_store(CacheStore::with_config(config))
    }

    /// Wraps an existing store.
    pub fn from_store(store: CacheStore<V>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    // == Store Operations ==
    /// Stores a key-value pair with optional TTL.
    pub async fn set(&self, key: &str, value: V, ttl: Option<Duration>) -> Result<()> {
        self.store.write().await.set(key, value, ttl)
    }

    /// Retrieves a value by key, `None` on absent or expired.
    ///
    /// Takes the write lock: a read may delete an expired entry and
    /// always updates the hit/miss counters.
    pub async fn get(&self, key: &str) -> Result<Option<V>> {
        self.store.write().await.get(key)
    }

    /// Removes an entry. Idempotent; reports whether a key was removed.
    pub async fn delete(&self, key: &str) -> Result<bool> {
        self.store.write().await.delete(key)
    }

    /// Removes all entries.
    pub async fn clear(&self) {
        self.store.write().await.clear();
    }

    /// Snapshot of current keys.
    pub async fn keys(&self) -> Vec<String> {
        self.store.read().await.keys()
    }

    /// Deletes every key containing `pattern` as a substring; returns
    /// the number removed.
    pub async fn invalidate_matching(&self, pattern: &str) -> usize {
        self.store.write().await.invalidate_matching(pattern)
    }

    /// Removes all expired entries; returns the number removed.
    pub async fn sweep_expired(&self) -> usize {
        self.store.write().await.sweep_expired()
    }

    /// Current statistics snapshot.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    // == Get Or Compute ==
    /// Cache-aside read: return the cached value, or invoke `supplier`
    /// on a miss, cache its result under `ttl`, and return it.
    ///
    /// A supplier failure propagates unchanged and is never cached, so
    /// the next call retries the supplier. The lock is not held across
    /// the supplier await; concurrent callers racing on the same miss
    /// may each invoke the supplier (no single-flight de-duplication -
    /// last completed write wins).
    pub async fn get_or_compute<F, Fut, E>(
        &self,
        key: &str,
        ttl: Option<Duration>,
        supplier: F,
    ) -> std::result::Result<V, ComputeError<E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<V, E>>,
    {
        if let Some(hit) = self.get(key).await? {
            return Ok(hit);
        }

        debug!(key, "cache miss, invoking supplier");
        let value = supplier().await.map_err(ComputeError::Supplier)?;

        self.set(key, value.clone(), ttl).await?;
        Ok(value)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("upstream unavailable")]
    struct UpstreamError;

    fn cache() -> ResponseCache<String> {
        ResponseCache::new(&CacheConfig {
            capacity: 100,
            default_ttl: Duration::from_secs(300),
            sweep_interval: Duration::from_secs(120),
        })
    }

    #[tokio::test]
    async fn test_handle_set_get_delete() {
        let cache = cache();

        cache.set("key1", "value1".to_string(), None).await.unwrap();
        assert_eq!(
            cache.get("key1").await.unwrap(),
            Some("value1".to_string())
        );

        assert!(cache.delete("key1").await.unwrap());
        assert_eq!(cache.get("key1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_handle_clones_share_state() {
        let cache = cache();
        let other = cache.clone();

        cache.set("shared", "v".to_string(), None).await.unwrap();
        assert_eq!(other.get("shared").await.unwrap(), Some("v".to_string()));
    }

    #[tokio::test]
    async fn test_get_or_compute_miss_then_hit() {
        let cache = cache();
        let calls = AtomicUsize::new(0);

        let first = cache
            .get_or_compute("feed:home", None, || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok::<_, UpstreamError>("computed".to_string()) }
            })
            .await
            .unwrap();
        assert_eq!(first, "computed");

        // Second call within the TTL must not invoke the supplier again
        let second = cache
            .get_or_compute("feed:home", None, || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok::<_, UpstreamError>("recomputed".to_string()) }
            })
            .await
            .unwrap();
        assert_eq!(second, "computed");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_get_or_compute_failure_not_cached() {
        let cache = cache();
        let calls = AtomicUsize::new(0);

        let first = cache
            .get_or_compute("flaky", None, || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err::<String, _>(UpstreamError) }
            })
            .await;
        assert!(matches!(first, Err(ComputeError::Supplier(_))));

        // Failure was not cached: the supplier runs again and succeeds
        let second = cache
            .get_or_compute("flaky", None, || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok::<_, UpstreamError>("recovered".to_string()) }
            })
            .await
            .unwrap();
        assert_eq!(second, "recovered");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_get_or_compute_expired_entry_recomputes() {
        let cache = cache();

        cache
            .set("stale", "old".to_string(), Some(Duration::from_millis(30)))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(40)).await;

        let value = cache
            .get_or_compute("stale", None, || async {
                Ok::<_, UpstreamError>("fresh".to_string())
            })
            .await
            .unwrap();
        assert_eq!(value, "fresh");
    }

    #[tokio::test]
    async fn test_get_or_compute_rejects_empty_key() {
        let cache = cache();

        let result = cache
            .get_or_compute("", None, || async {
                Ok::<_, UpstreamError>("v".to_string())
            })
            .await;
        assert!(matches!(result, Err(ComputeError::Cache(_))));
    }

    #[tokio::test]
    async fn test_handle_invalidate_matching() {
        let cache = cache();

        cache
            .set("user:42:posts", "p".to_string(), None)
            .await
            .unwrap();
        cache
            .set("user:42:profile", "f".to_string(), None)
            .await
            .unwrap();
        cache
            .set("user:7:posts", "q".to_string(), None)
            .await
            .unwrap();

        let removed = cache.invalidate_matching("user:42").await;
        assert_eq!(removed, 2);
        assert_eq!(cache.get("user:7:posts").await.unwrap(), Some("q".to_string()));
    }

    #[tokio::test]
    async fn test_handle_stats() {
        let cache = cache();

        cache.set("key1", "v".to_string(), None).await.unwrap();
        cache.get("key1").await.unwrap();
        cache.get("missing").await.unwrap();

        let stats = cache.stats().await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.size, 1);
    }
}
