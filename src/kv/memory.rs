//! In-process KV store backed by `DashMap`.
//!
//! Holds whatever an offline job seeded into it; data is lost on restart.
//! Used for tests, demos and single-process deployments.

use super::KvStore;
use crate::Result;
use dashmap::DashMap;

/// In-memory key-value store using a lock-free concurrent hashmap.
///
/// # Example
///
/// ```rust
/// use botify_core::kv::{KvStore, MemoryKvStore};
///
/// # async fn example() -> botify_core::Result<()> {
/// let store = MemoryKvStore::from_entries([("1", b"[2,3]".to_vec())]);
/// assert_eq!(store.get("1").await?, Some(b"[2,3]".to_vec()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MemoryKvStore {
    store: DashMap<String, Vec<u8>>,
}

impl MemoryKvStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: DashMap::new(),
        }
    }

    /// Create with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: DashMap::with_capacity(capacity),
        }
    }

    /// Create a store seeded with `entries`.
    #[must_use]
    pub fn from_entries<K: Into<String>>(entries: impl IntoIterator<Item = (K, Vec<u8>)>) -> Self {
        Self {
            store: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }

    /// Insert without going through the async API (seeding).
    pub fn insert(&self, key: impl Into<String>, value: Vec<u8>) {
        self.store.insert(key.into(), value);
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Clear all entries.
    pub fn clear(&self) {
        self.store.clear();
    }
}

impl Default for MemoryKvStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.store.get(key).map(|v| v.value().clone()))
    }
}
