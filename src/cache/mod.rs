//! Cache Module
//!
//! Bounded in-memory caching with TTL expiry, FIFO eviction, and
//! pattern-based invalidation.

mod entry;
mod fifo;
mod handle;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use fifo::InsertionOrder;
pub use handle::ResponseCache;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;
