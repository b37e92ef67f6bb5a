//! In-memory key-value store for testing and embedding.
//!
//! [`InMemoryKvStore`] keeps all entries in a `BTreeMap` protected by a
//! `RwLock`, so listings come back in lexicographic key order just as they do
//! from Consul. Writes assign a fresh, store-wide modification index.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use seed_types::{Entry, ModifyIndex};

use crate::error::{StoreError, StoreResult};
use crate::traits::KvStore;

#[derive(Debug, Default)]
struct Inner {
    entries: BTreeMap<String, Entry>,
    last_index: ModifyIndex,
}

/// An in-memory implementation of [`KvStore`].
///
/// Data is lost when the store is dropped.
#[derive(Debug, Default)]
pub struct InMemoryKvStore {
    inner: RwLock<Inner>,
}

impl InMemoryKvStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` at `key`, returning the assigned modification index.
    pub fn put(&self, key: &str, value: impl Into<Vec<u8>>) -> StoreResult<ModifyIndex> {
        self.write_entry(key, Some(value.into()))
    }

    /// Store a folder marker at `key`, returning the assigned modification index.
    pub fn put_folder(&self, key: &str) -> StoreResult<ModifyIndex> {
        self.write_entry(key, None)
    }

    /// Insert an entry verbatim, keeping its own modification index.
    ///
    /// The store-wide counter is raised so later writes stay monotonic.
    pub fn insert(&self, entry: Entry) -> StoreResult<()> {
        let mut inner = self.inner.write().map_err(|e| {
            StoreError::Unavailable(format!("lock poisoned: {e}"))
        })?;
        inner.last_index = inner.last_index.max(entry.modify_index);
        inner.entries.insert(entry.key.clone(), entry);
        Ok(())
    }

    /// Remove the entry at `key`. Returns `true` if it existed.
    pub fn remove(&self, key: &str) -> StoreResult<bool> {
        let mut inner = self.inner.write().map_err(|e| {
            StoreError::Unavailable(format!("lock poisoned: {e}"))
        })?;
        Ok(inner.entries.remove(key).is_some())
    }

    /// Number of entries, folder markers included.
    pub fn len(&self) -> StoreResult<usize> {
        let inner = self.inner.read().map_err(|e| {
            StoreError::Unavailable(format!("lock poisoned: {e}"))
        })?;
        Ok(inner.entries.len())
    }

    /// Returns `true` if the store holds no entries.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    fn write_entry(&self, key: &str, value: Option<Vec<u8>>) -> StoreResult<ModifyIndex> {
        let mut inner = self.inner.write().map_err(|e| {
            StoreError::Unavailable(format!("lock poisoned: {e}"))
        })?;
        let index = inner.last_index.next();
        inner.last_index = index;
        inner.entries.insert(
            key.to_string(),
            Entry {
                key: key.to_string(),
                value,
                modify_index: index,
            },
        );
        Ok(index)
    }
}

#[async_trait]
impl KvStore for InMemoryKvStore {
    async fn get(&self, key: &str) -> StoreResult<Option<Entry>> {
        let inner = self.inner.read().map_err(|e| {
            StoreError::Unavailable(format!("lock poisoned: {e}"))
        })?;
        Ok(inner.entries.get(key).cloned())
    }

    async fn list(&self, prefix: &str) -> StoreResult<Vec<Entry>> {
        let inner = self.inner.read().map_err(|e| {
            StoreError::Unavailable(format!("lock poisoned: {e}"))
        })?;
        let entries: Vec<Entry> = inner
            .entries
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(_, v)| v.clone())
            .collect();
        tracing::trace!(prefix, count = entries.len(), "in-memory listing");
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_and_get() {
        let store = InMemoryKvStore::new();
        let idx = store.put("app/db", "postgres://db").unwrap();

        let entry = store.get("app/db").await.unwrap().unwrap();
        assert_eq!(entry.key, "app/db");
        assert_eq!(entry.value.as_deref(), Some(&b"postgres://db"[..]));
        assert_eq!(entry.modify_index, idx);
    }

    #[tokio::test]
    async fn get_missing_returns_none() {
        let store = InMemoryKvStore::new();
        assert!(store.get("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_is_exact_match_only() {
        let store = InMemoryKvStore::new();
        store.put("app/db/host", "localhost").unwrap();
        assert!(store.get("app/db").await.unwrap().is_none());
    }

    #[test]
    fn indexes_are_monotonic() {
        let store = InMemoryKvStore::new();
        let a = store.put("a", "1").unwrap();
        let b = store.put_folder("b/").unwrap();
        let c = store.put("a", "2").unwrap();
        assert!(a < b && b < c);
    }

    #[tokio::test]
    async fn insert_keeps_index_and_raises_counter() {
        let store = InMemoryKvStore::new();
        store
            .insert(Entry::new("x", "1", ModifyIndex::new(100)))
            .unwrap();
        let next = store.put("y", "2").unwrap();
        assert_eq!(next, ModifyIndex::new(101));

        let x = store.get("x").await.unwrap().unwrap();
        assert_eq!(x.modify_index, ModifyIndex::new(100));
    }

    #[tokio::test]
    async fn list_is_lexicographic_and_includes_folders() {
        let store = InMemoryKvStore::new();
        store.put("app/db/port", "5432").unwrap();
        store.put_folder("app/db/").unwrap();
        store.put("app/db/host", "localhost").unwrap();
        store.put("app/web", "nginx").unwrap();

        let keys: Vec<String> = store
            .list("app/db")
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.key)
            .collect();
        assert_eq!(keys, vec!["app/db/", "app/db/host", "app/db/port"]);
    }

    #[tokio::test]
    async fn list_is_a_raw_prefix_match() {
        let store = InMemoryKvStore::new();
        store.put("app/db/host", "localhost").unwrap();
        store.put("app/dbx", "other").unwrap();

        let listed = store.list("app/db").await.unwrap();
        assert_eq!(listed.len(), 2);
    }

    #[tokio::test]
    async fn list_missing_prefix_is_empty() {
        let store = InMemoryKvStore::new();
        store.put("app/db", "x").unwrap();
        assert!(store.list("zzz").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn remove_entry() {
        let store = InMemoryKvStore::new();
        store.put("k", "v").unwrap();
        assert!(store.remove("k").unwrap());
        assert!(!store.remove("k").unwrap());
        assert!(store.get("k").await.unwrap().is_none());
        assert!(store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn poisoned_lock_is_unavailable() {
        let store = InMemoryKvStore::new();
        store.put("k", "v").unwrap();
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = store.inner.write().unwrap();
            panic!("writer died");
        }));

        assert!(matches!(store.len(), Err(StoreError::Unavailable(_))));
        assert!(matches!(store.is_empty(), Err(StoreError::Unavailable(_))));
        assert!(matches!(store.get("k").await, Err(StoreError::Unavailable(_))));
        assert!(matches!(store.put("x", "y"), Err(StoreError::Unavailable(_))));
    }
}
