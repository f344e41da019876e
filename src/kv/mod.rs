//! Key-Value Store contract
//!
//! The recommenders read everything they know about tracks and users from
//! key-value stores populated offline:
//! - the track store: track id -> encoded [`Track`](crate::catalog::Track)
//! - the per-user store: user id -> encoded candidate list
//!
//! Keys are decimal ids. Connection management, timeouts and retries belong
//! to the store client; a failing client reports `Error::StoreUnavailable`.
//!
//! # Example
//!
//! ```rust,no_run
//! use botify_core::kv::{KvStore, MemoryKvStore};
//!
//! # async fn example() -> botify_core::Result<()> {
//! let store = MemoryKvStore::new();
//! store.insert("1001", b"[1,2,3]".to_vec());
//!
//! assert_eq!(store.get("1001").await?, Some(b"[1,2,3]".to_vec()));
//! assert_eq!(store.get("1002").await?, None);
//! # Ok(())
//! # }
//! ```

mod memory;

pub use memory::MemoryKvStore;

use crate::Result;
use std::future::Future;
use std::sync::Arc;

/// Async, read-only key-value store.
///
/// Writes happen offline; the recommenders only ever read.
pub trait KvStore: Send + Sync {
    /// Get a value by key.
    ///
    /// Returns `None` if the key doesn't exist.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<Vec<u8>>>> + Send;
}

// Stores are shared between tiers of one cascade and across cascades.
impl<S: KvStore> KvStore for Arc<S> {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<Vec<u8>>>> + Send {
        (**self).get(key)
    }
}
