//! Request DTOs for the cache HTTP API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

use crate::cache::MAX_KEY_LENGTH;

/// Request body for storing an entry (PUT /entries)
///
/// # Fields
/// - `key`: The cache key to store the value under
/// - `value`: Opaque JSON payload to cache
/// - `ttl_ms`: Optional TTL in milliseconds (default TTL applies if
///   omitted or zero)
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    pub key: String,
    /// The payload to store
    pub value: Value,
    /// Optional TTL in milliseconds
    #[serde(default)]
    pub ttl_ms: Option<u64>,
}

impl SetRequest {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        if self.key.len() > MAX_KEY_LENGTH {
            return Some(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            ));
        }
        None
    }
}

/// Request body for pattern invalidation (POST /invalidate)
///
/// Every cached key containing `pattern` as a substring is removed.
#[derive(Debug, Clone, Deserialize)]
pub struct InvalidateRequest {
    /// Substring to match against cached keys
    pub pattern: String,
}

impl InvalidateRequest {
    /// Validates the request data.
    ///
    /// An empty pattern would match every key; callers wanting that use
    /// DELETE /entries instead.
    pub fn validate(&self) -> Option<String> {
        if self.pattern.is_empty() {
            return Some("Pattern cannot be empty".to_string());
        }
        None
    }
}
