//! Entry Store
//!
//! Directory/file semantics over a [`StorageBackend`]. Each operation checks
//! all of its preconditions before its first write, so a failed call leaves
//! the table untouched.
//!
//! Concurrency contract: every backend call is atomic, but the
//! read-modify-write pairs used for parent listings are not one transaction.
//! At most one command may be in flight per session; sessions sharing a
//! store get no isolation from each other.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use super::consistency;
use super::json_file::JsonFileBackend;
use super::memory::InMemoryBackend;
use super::path::{is_within_root, normalize_key, parent_of};
use super::types::*;

/// Shared handle to the entry table. Cloning is cheap.
#[derive(Clone)]
pub struct EntryStore {
    backend: Arc<dyn StorageBackend>,
}

impl EntryStore {
    /// Wrap a backend and make sure the root directory exists.
    pub async fn open(backend: Arc<dyn StorageBackend>) -> Result<Self, StoreError> {
        let store = Self { backend };
        store.ensure_root().await?;
        Ok(store)
    }

    /// A fresh store backed by memory only.
    pub async fn in_memory() -> Result<Self, StoreError> {
        Self::open(Arc::new(InMemoryBackend::new())).await
    }

    /// A store persisted to the JSON document at `path`.
    pub async fn json_file(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let backend = JsonFileBackend::open(path).await?;
        Self::open(Arc::new(backend)).await
    }

    /// Create the root directory if it is missing.
    pub async fn ensure_root(&self) -> Result<(), StoreError> {
        match self.backend.get(ROOT).await {
            Some(entry) if entry.is_directory() => Ok(()),
            Some(_) => Err(StoreError::not_found(ROOT, "Directory")),
            None => {
                debug!("initializing root directory");
                self.backend.insert(Entry::directory(ROOT)).await
            }
        }
    }

    pub async fn exists(&self, path: &str) -> bool {
        self.backend.get(&normalize_key(path)).await.is_some()
    }

    /// Fresh copy of the record at `path`.
    pub async fn get(&self, path: &str) -> Option<Entry> {
        self.backend.get(&normalize_key(path)).await
    }

    /// Insert an empty directory. The parent's listing is left alone; the
    /// caller applies [`consistency::register_child`] afterwards.
    pub async fn create_directory(&self, path: &str) -> Result<(), StoreError> {
        let key = normalize_key(path);
        if self.backend.get(&key).await.is_some() {
            return Err(StoreError::already_exists(&key));
        }
        debug!(path = %key, "create directory");
        self.backend.insert(Entry::directory(key)).await
    }

    /// Insert a file under an existing directory and list it in that
    /// directory.
    pub async fn create_file(&self, path: &str, content: &str) -> Result<(), StoreError> {
        let key = normalize_key(path);
        if self.backend.get(&key).await.is_some() {
            return Err(StoreError::already_exists(&key));
        }
        self.parent_directory(&key).await?;

        debug!(path = %key, bytes = content.len(), "create file");
        self.backend.insert(Entry::file(key.clone(), content)).await?;
        consistency::register_child(self, &key).await?;
        Ok(())
    }

    /// Key of the directory that holds `path`. Fails with `ParentMissing`
    /// unless it is an existing directory inside the root tree.
    pub async fn parent_directory(&self, path: &str) -> Result<String, StoreError> {
        let key = normalize_key(path);
        if !is_within_root(&key) {
            // "/foo" hangs off the bare separator, which is never stored
            let parent = key
                .rsplit_once(SEPARATOR)
                .map_or_else(|| SEPARATOR.to_string(), |(dir, _)| dir.to_string());
            return Err(StoreError::ParentMissing { path: parent });
        }
        let parent = parent_of(&key);
        match self.backend.get(&parent).await {
            Some(entry) if entry.is_directory() => Ok(parent),
            _ => Err(StoreError::ParentMissing { path: parent }),
        }
    }

    pub async fn read_file(&self, path: &str) -> Result<String, StoreError> {
        let key = normalize_key(path);
        match self.backend.get(&key).await {
            Some(Entry { node: EntryNode::File { content }, .. }) => Ok(content),
            _ => Err(StoreError::not_found(&key, "File")),
        }
    }

    /// Replace a file's content wholesale.
    pub async fn write_file(&self, path: &str, content: &str) -> Result<(), StoreError> {
        let key = normalize_key(path);
        match self.backend.get(&key).await {
            Some(entry) if entry.is_file() => {
                debug!(path = %key, bytes = content.len(), "write file");
                self.backend.put(Entry::file(key, content)).await
            }
            _ => Err(StoreError::not_found(&key, "File")),
        }
    }

    /// Child keys of a directory, in listing order.
    pub async fn list_contents(&self, path: &str) -> Result<Vec<String>, StoreError> {
        let key = normalize_key(path);
        match self.backend.get(&key).await {
            Some(Entry { node: EntryNode::Directory { children }, .. }) => Ok(children),
            _ => Err(StoreError::not_found(&key, "Directory")),
        }
    }

    /// Remove a file or an empty directory and drop it from its parent's
    /// listing.
    pub async fn delete_entry(&self, path: &str) -> Result<(), StoreError> {
        let key = normalize_key(path);
        let entry = self
            .backend
            .get(&key)
            .await
            .ok_or_else(|| StoreError::not_found(&key, "Entry"))?;
        if key == ROOT {
            return Err(StoreError::RootProtected);
        }
        if entry.children().is_some_and(|c| !c.is_empty()) {
            return Err(StoreError::DirectoryNotEmpty { path: key });
        }

        debug!(path = %key, kind = %entry.kind(), "delete entry");
        self.backend.delete(&key).await?;
        consistency::unregister_child(self, &key).await?;
        Ok(())
    }

    pub(crate) async fn put_record(&self, entry: Entry) -> Result<(), StoreError> {
        self.backend.put(entry).await
    }

    /// Every key in the table.
    pub async fn all_paths(&self) -> Vec<String> {
        self.backend.keys().await
    }
}
