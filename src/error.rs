//! Error types for the response cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache operations and the HTTP surface.
///
/// Store operations never fail on well-formed input; the only
/// store-level error is a malformed key, which is a programmer error
/// surfaced immediately to the caller.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key is empty or exceeds the maximum length
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Key not present (or expired) - used by the HTTP read endpoint
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Invalid request data on the HTTP surface
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == Compute Error Enum ==
/// Error returned by the cache-aside helper.
///
/// Supplier failures are propagated unchanged and are never cached;
/// a miss followed by a supplier failure looks identical to calling
/// the supplier directly without caching.
#[derive(Error, Debug)]
pub enum ComputeError<E> {
    /// The cache rejected the key
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// The supplier invoked on a miss failed
    #[error("Supplier failed: {0}")]
    Supplier(E),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            CacheError::InvalidKey(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            CacheError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            CacheError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
