//! JSON File Backend
//!
//! Keeps the table in memory and rewrites a JSON document after every
//! mutating unit of work. The file is created on first use.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::memory::InMemoryBackend;
use super::types::*;

const FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct StoreDocument {
    version: u32,
    entries: Vec<Entry>,
}

/// Entry table persisted to a single JSON file.
pub struct JsonFileBackend {
    path: PathBuf,
    table: InMemoryBackend,
    // Held from staging a change until it is swapped in.
    flush_lock: Mutex<()>,
}

impl JsonFileBackend {
    /// Open the store at `path`, creating an empty document if it is missing.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(text) => {
                let document: StoreDocument = serde_json::from_str(&text)
                    .map_err(|e| StoreError::Serialization { message: e.to_string() })?;
                if document.version != FORMAT_VERSION {
                    return Err(StoreError::Serialization {
                        message: format!("unsupported store version {}", document.version),
                    });
                }
                debug!(path = %path.display(), entries = document.entries.len(), "loaded store");
                document.entries
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "creating new store file");
                Vec::new()
            }
            Err(e) => return Err(io_error(&path, e)),
        };

        let backend = Self {
            path,
            table: InMemoryBackend::with_entries(entries),
            flush_lock: Mutex::new(()),
        };
        backend.write_document(backend.table.snapshot().await).await?;
        Ok(backend)
    }

    /// Apply `change` to a staged copy of the table, write the copy out,
    /// then swap it in. A failed write leaves memory and disk unchanged.
    async fn commit<F>(&self, change: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut IndexMap<String, Entry>) -> Result<(), StoreError> + Send,
    {
        let _guard = self.flush_lock.lock().await;
        let mut staged = self.table.table().await;
        change(&mut staged)?;
        self.write_document(staged.values().cloned().collect()).await?;
        self.table.replace(staged).await;
        Ok(())
    }

    /// Serialize `entries` and atomically replace the store file.
    async fn write_document(&self, entries: Vec<Entry>) -> Result<(), StoreError> {
        let count = entries.len();
        let document = StoreDocument { version: FORMAT_VERSION, entries };
        let text = serde_json::to_string_pretty(&document)
            .map_err(|e| StoreError::Serialization { message: e.to_string() })?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir).await.map_err(|e| io_error(dir, e))?;
        }
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, text).await.map_err(|e| io_error(&tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| io_error(&self.path, e))?;
        debug!(path = %self.path.display(), entries = count, "store written");
        Ok(())
    }
}

fn io_error(path: &Path, e: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}

#[async_trait]
impl StorageBackend for JsonFileBackend {
    async fn get(&self, key: &str) -> Option<Entry> {
        self.table.get(key).await
    }

    async fn insert(&self, entry: Entry) -> Result<(), StoreError> {
        self.commit(move |table| {
            if table.contains_key(&entry.path) {
                return Err(StoreError::already_exists(&entry.path));
            }
            table.insert(entry.path.clone(), entry);
            Ok(())
        })
        .await
    }

    async fn put(&self, entry: Entry) -> Result<(), StoreError> {
        self.commit(move |table| {
            table.insert(entry.path.clone(), entry);
            Ok(())
        })
        .await
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.commit(|table| {
            table.shift_remove(key);
            Ok(())
        })
        .await
    }

    async fn keys(&self) -> Vec<String> {
        self.table.keys().await
    }
}
