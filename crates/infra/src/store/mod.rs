//! Key/value storage abstractions.

pub mod in_memory;

pub use in_memory::InMemoryStore;

use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Keys are write-once; a second `put` for the same key is refused.
    #[error("key already present: {0}")]
    DuplicateKey(String),
}

/// Write-once key/value store.
///
/// A `put` that returned `Ok` is visible to every subsequent `get` for that key.
/// No ordering is promised across different keys.
pub trait KeyValueStore<K, V>: Send + Sync {
    fn put(&self, key: K, value: V) -> Result<(), StoreError>;
    fn get(&self, key: &K) -> Option<V>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V, S> KeyValueStore<K, V> for Arc<S>
where
    S: KeyValueStore<K, V> + ?Sized,
{
    fn put(&self, key: K, value: V) -> Result<(), StoreError> {
        (**self).put(key, value)
    }

    fn get(&self, key: &K) -> Option<V> {
        (**self).get(key)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
