//! Cache Entry Module
//!
//! Defines the structure of individual cache entries with TTL metadata.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single cache entry: the stored value plus expiry metadata.
///
/// Every entry carries a concrete TTL; the store substitutes its
/// default before construction when the caller omits one.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Insertion timestamp (Unix milliseconds)
    pub inserted_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl` after now.
    pub fn new(value: V, ttl: Duration) -> Self {
        let now = current_timestamp_ms();
        Self {
            value,
            inserted_at: now,
            expires_at: now.saturating_add(ttl.as_millis() as u64),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired once the current time is
    /// greater than or equal to the expiration time, so a read at the
    /// exact expiry instant already misses. An expired entry must never
    /// be returned, even if it has not been physically removed yet.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }

    // == Time To Live ==
    /// Returns the remaining TTL, zero once expired.
    pub fn ttl_remaining(&self) -> Duration {
        let now = current_timestamp_ms();
        Duration::from_millis(self.expires_at.saturating_sub(now))
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("payload".to_string(), Duration::from_secs(60));

        assert_eq!(entry.value, "payload");
        assert!(entry.expires_at > entry.inserted_at);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new("payload".to_string(), Duration::from_millis(50));

        assert!(!entry.is_expired());

        sleep(Duration::from_millis(60));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_ttl_remaining() {
        let entry = CacheEntry::new("payload".to_string(), Duration::from_secs(10));

        let remaining = entry.ttl_remaining();
        assert!(remaining <= Duration::from_secs(10));
        assert!(remaining >= Duration::from_secs(9));
    }

    #[test]
    fn test_ttl_remaining_expired() {
        let entry = CacheEntry::new("payload".to_string(), Duration::from_millis(20));

        sleep(Duration::from_millis(30));

        assert_eq!(entry.ttl_remaining(), Duration::ZERO);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = current_timestamp_ms();
        let entry = CacheEntry {
            value: "payload".to_string(),
            inserted_at: now,
            expires_at: now, // Expires exactly at creation time
        };

        // Entry is expired when current time >= expires_at
        assert!(entry.is_expired(), "Entry should be expired at boundary");
    }

    #[test]
    fn test_entry_holds_non_string_payload() {
        let entry = CacheEntry::new(vec![1u32, 2, 3], Duration::from_secs(5));
        assert_eq!(entry.value, vec![1, 2, 3]);
    }
}
