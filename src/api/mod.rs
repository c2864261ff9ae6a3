//! API Module
//!
//! HTTP handlers and routing for the cache REST API.
//!
//! # Endpoints
//! - `PUT /entries` - Store a key-value pair
//! - `GET /entries/:key` - Retrieve a value by key
//! - `DELETE /entries/:key` - Delete a key (idempotent)
//! - `DELETE /entries` - Clear the cache
//! - `POST /invalidate` - Remove keys matching a substring pattern
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
