use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{KeyValueStore, StoreError};

/// Process-local store; contents are lost on restart.
#[derive(Debug)]
pub struct InMemoryStore<K, V> {
    inner: RwLock<HashMap<K, V>>,
}

impl<K, V> InMemoryStore<K, V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    // Every write is a single `HashMap` call, so the map stays consistent
    // even when a panicking thread poisoned the lock.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<K, V>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<K, V>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K, V> Default for InMemoryStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> KeyValueStore<K, V> for InMemoryStore<K, V>
where
    K: Eq + Hash + Debug + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn put(&self, key: K, value: V) -> Result<(), StoreError> {
        match self.write().entry(key) {
            Entry::Occupied(e) => {
                tracing::warn!(key = ?e.key(), "refusing to overwrite stored value");
                Err(StoreError::DuplicateKey(format!("{:?}", e.key())))
            }
            Entry::Vacant(e) => {
                e.insert(value);
                Ok(())
            }
        }
    }

    fn get(&self, key: &K) -> Option<V> {
        self.read().get(key).cloned()
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
