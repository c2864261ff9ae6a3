//! API Handlers
//!
//! HTTP request handlers for each cache endpoint. These are the write
//! and read paths of the "external collaborator": route handlers that
//! consume the in-process cache API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use std::time::Duration;

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    ClearResponse, DeleteResponse, GetResponse, HealthResponse, InvalidateRequest,
    InvalidateResponse, SetRequest, SetResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// Holds the cache handle; the handle is cheap to clone and all clones
/// share one store.
#[derive(Clone)]
pub struct AppState {
    /// Shared response cache
    pub cache: ResponseCache<Value>,
}

impl AppState {
    /// Creates a new AppState with the given cache handle.
    pub fn new(cache: ResponseCache<Value>) -> Self {
        Self { cache }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(ResponseCache::new(&config.cache))
    }
}

/// Handler for PUT /entries
///
/// Stores a key-value pair in the cache with optional TTL.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let ttl = req.ttl_ms.map(Duration::from_millis);
    state.cache.set(&req.key, req.value, ttl).await?;

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /entries/:key
///
/// Retrieves a cached value; absent and expired keys both map to 404.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    match state.cache.get(&key).await? {
        Some(value) => Ok(Json(GetResponse::new(key, value))),
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for DELETE /entries/:key
///
/// Deletes a key. Idempotent: deleting an absent key succeeds with
/// `removed: false`.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let removed = state.cache.delete(&key).await?;

    Ok(Json(DeleteResponse::new(key, removed)))
}

/// Handler for DELETE /entries
///
/// Clears the entire cache.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    state.cache.clear().await;

    Json(ClearResponse::new())
}

/// Handler for POST /invalidate
///
/// Removes every cached key containing the given substring. Used by
/// write paths to evict a family of cached reads after a mutation.
pub async fn invalidate_handler(
    State(state): State<AppState>,
    Json(req): Json<InvalidateRequest>,
) -> Result<Json<InvalidateResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let removed = state.cache.invalidate_matching(&req.pattern).await;

    Ok(Json(InvalidateResponse::new(req.pattern, removed)))
}

/// Handler for GET /stats
///
/// Returns current cache statistics for external monitoring.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats().await;

    Json(StatsResponse::from_stats(&stats))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
