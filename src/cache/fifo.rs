//! Insertion Order Module
//!
//! Tracks key insertion order for FIFO eviction.
//!
//! FIFO is intentional: eviction goes by insertion order regardless of
//! access recency, which suits read-heavy, short-TTL response caching.
//! Reads never reorder keys; only inserts (and overwrites, which reset
//! the insertion timestamp) do.

use std::collections::VecDeque;

// == Insertion Order ==
/// Tracks the order in which keys were inserted.
///
/// Keys are stored in a VecDeque where:
/// - Front = Oldest insertion
/// - Back = Newest insertion
#[derive(Debug, Default)]
pub struct InsertionOrder {
    /// Keys ordered by insertion time
    order: VecDeque<String>,
}

impl InsertionOrder {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Note Insert ==
    /// Records an insertion (or overwrite) of a key.
    ///
    /// An overwrite moves the key to the back, matching its refreshed
    /// insertion timestamp.
    pub fn note_insert(&mut self, key: &str) {
        self.forget(key);
        self.order.push_back(key.to_string());
    }

    // == Forget ==
    /// Removes a key from the tracker. No-op if absent.
    pub fn forget(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Pop Oldest ==
    /// Returns and removes the oldest-inserted key.
    ///
    /// Returns None if the tracker is empty.
    pub fn pop_oldest(&mut self) -> Option<String> {
        self.order.pop_front()
    }

    // == Peek Oldest ==
    /// Returns the oldest-inserted key without removing it.
    #[allow(dead_code)]
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.front()
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Clear ==
    /// Drops all tracked keys.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    #[allow(dead_code)]
    pub fn contains(&self, key: &str) -> bool {
        self.order.iter().any(|k| k == key)
    }
}
