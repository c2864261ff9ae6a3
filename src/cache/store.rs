//! Cache Store Module
//!
//! Bounded map of TTL-tagged entries with FIFO eviction, lazy expiry
//! on read, substring invalidation, and a bulk expired-entry sweep.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, InsertionOrder, MAX_KEY_LENGTH};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Bounded in-memory storage of TTL-tagged entries.
///
/// Holds `size() <= capacity` after every mutating operation. When a
/// set of a new key would exceed capacity, the single oldest-inserted
/// entry is evicted first (FIFO - access recency is ignored).
///
/// The store itself is synchronous; callers needing shared access wrap
/// it behind a lock (see [`ResponseCache`](crate::cache::ResponseCache)).
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Insertion-order tracker for FIFO eviction
    order: InsertionOrder,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
    /// TTL applied when a set omits one (or passes zero)
    default_ttl: Duration,
}

impl<V: Clone> CacheStore<V> {
    // == Constructors ==
    /// Creates a new CacheStore with the given capacity and default TTL.
    ///
    /// Capacity is clamped to at least one entry.
    pub fn new(capacity: usize, default_ttl: Duration) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: CacheStats::new(capacity),
            capacity,
            default_ttl,
        }
    }

    /// Creates a new CacheStore from a [`CacheConfig`].
    pub fn with_config(config: &CacheConfig) -> Self {
        Self::new(config.capacity, config.default_ttl)
    }

    // == Set ==
    /// Stores a key-value pair with optional TTL.
    ///
    /// A `None` or zero TTL falls back to the configured default. If
    /// the key already exists its value, timestamp, and TTL are
    /// replaced and no eviction occurs. If the key is new and the store
    /// is at capacity, the oldest-inserted entry is evicted first.
    pub fn set(&mut self, key: &str, value: V, ttl: Option<Duration>) -> Result<()> {
        validate_key(key)?;

        let is_overwrite = self.entries.contains_key(key);

        // Overwrites never trigger eviction
        if !is_overwrite && self.entries.len() >= self.capacity {
            if let Some(evicted_key) = self.order.pop_oldest() {
                self.entries.remove(&evicted_key);
                self.stats.record_eviction();
            }
        }

        let effective_ttl = ttl.filter(|t| !t.is_zero()).unwrap_or(self.default_ttl);

        let entry = CacheEntry::new(value, effective_ttl);
        self.entries.insert(key.to_string(), entry);
        self.order.note_insert(key);

        self.stats.set_size(self.entries.len());

        Ok(())
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `Ok(None)` when the key is absent or expired. An entry
    /// found expired is removed on the spot (lazy expiry). Live hits do
    /// not refresh the entry's position in the eviction order.
    pub fn get(&mut self, key: &str) -> Result<Option<V>> {
        validate_key(key)?;

        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired() {
                self.entries.remove(key);
                self.order.forget(key);
                self.stats.set_size(self.entries.len());
                self.stats.record_expiration();
                self.stats.record_miss();
                return Ok(None);
            }

            let value = entry.value.clone();
            self.stats.record_hit();
            Ok(Some(value))
        } else {
            self.stats.record_miss();
            Ok(None)
        }
    }

    // == Delete ==
    /// Removes an entry by key. Idempotent; reports whether a key was
    /// actually removed.
    pub fn delete(&mut self, key: &str) -> Result<bool> {
        validate_key(key)?;

        if self.entries.remove(key).is_some() {
            self.order.forget(key);
            self.stats.set_size(self.entries.len());
            Ok(true)
        } else {
            Ok(false)
        }
    }

    // == Clear ==
    /// Removes all entries. Used by tests and full resets.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.stats.set_size(0);
    }

    // == Keys ==
    /// Returns a snapshot of the current keys.
    ///
    /// The snapshot reflects state at call time and may include
    /// expired-but-not-yet-swept keys.
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    // == Invalidate Matching ==
    /// Deletes every key containing `pattern` as a substring.
    ///
    /// Used when a write invalidates a family of cached reads (e.g.,
    /// all keys mentioning a resource id). An empty pattern matches
    /// every key. Returns the number of entries removed.
    pub fn invalidate_matching(&mut self, pattern: &str) -> usize {
        let matching: Vec<String> = self
            .entries
            .keys()
            .filter(|key| key.contains(pattern))
            .cloned()
            .collect();

        let count = matching.len();

        for key in matching {
            self.entries.remove(&key);
            self.order.forget(&key);
        }

        self.stats.set_size(self.entries.len());
        count
    }

    // == Sweep Expired ==
    /// Removes all expired entries, bounding memory growth from keys
    /// written once and never read again before expiry.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
            self.order.forget(&key);
            self.stats.record_expiration();
        }

        self.stats.set_size(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_size(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Key Validation ==
/// Rejects empty and oversized keys. A malformed key is a programmer
/// error and surfaces immediately rather than being silently accepted.
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CacheError::InvalidKey("Key cannot be empty".to_string()));
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(CacheError::InvalidKey(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        )));
    }
    Ok(())
}
