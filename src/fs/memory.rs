//! In-Memory Backend
//!
//! A pure in-memory entry table. Also serves as the working copy for the
//! JSON file backend.

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::types::*;

/// In-memory entry table.
pub struct InMemoryBackend {
    data: RwLock<IndexMap<String, Entry>>,
}

impl InMemoryBackend {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { data: RwLock::new(IndexMap::new()) }
    }

    /// Create a table pre-populated with `entries`. Later duplicates win.
    pub fn with_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let data = entries
            .into_iter()
            .map(|entry| (entry.path.clone(), entry))
            .collect();
        Self { data: RwLock::new(data) }
    }

    /// Copy of every record, in insertion order.
    pub async fn snapshot(&self) -> Vec<Entry> {
        self.data.read().await.values().cloned().collect()
    }

    /// Copy of the whole table, for staging a change.
    pub(crate) async fn table(&self) -> IndexMap<String, Entry> {
        self.data.read().await.clone()
    }

    /// Swap in a staged table.
    pub(crate) async fn replace(&self, table: IndexMap<String, Entry>) {
        *self.data.write().await = table;
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageBackend for InMemoryBackend {
    async fn get(&self, key: &str) -> Option<Entry> {
        self.data.read().await.get(key).cloned()
    }

    async fn insert(&self, entry: Entry) -> Result<(), StoreError> {
        let mut data = self.data.write().await;
        if data.contains_key(&entry.path) {
            return Err(StoreError::already_exists(&entry.path));
        }
        data.insert(entry.path.clone(), entry);
        Ok(())
    }

    async fn put(&self, entry: Entry) -> Result<(), StoreError> {
        self.data.write().await.insert(entry.path.clone(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        // shift_remove keeps the remaining keys in insertion order
        self.data.write().await.shift_remove(key);
        Ok(())
    }

    async fn keys(&self) -> Vec<String> {
        self.data.read().await.keys().cloned().collect()
    }
}
