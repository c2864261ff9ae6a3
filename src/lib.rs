//! Kliq Cache - a bounded in-memory TTL response cache
//!
//! Provides FIFO-evicting, TTL-expiring key-value caching with a
//! cache-aside helper and pattern-based invalidation, fronted by a
//! small HTTP API.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheStats, CacheStore, ResponseCache};
pub use config::{CacheConfig, Config};
pub use error::{CacheError, ComputeError};
pub use tasks::{spawn_sweep_task, SweepHandle};
