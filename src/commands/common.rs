// src/commands/common.rs
//! Precondition checks shared by the handlers.

use crate::fs::{path, EntryStore, StoreError};

/// Fail with `AlreadyExists` if anything lives at `path`.
pub async fn require_absent(store: &EntryStore, path: &str) -> Result<(), StoreError> {
    if store.exists(path).await {
        return Err(StoreError::already_exists(&path::normalize_key(path)));
    }
    Ok(())
}

/// Fail with `ParentMissing` unless the parent of `path` is a directory.
/// Checked before creating so no entry is left unlisted.
pub async fn require_parent_directory(store: &EntryStore, path: &str) -> Result<(), StoreError> {
    store.parent_directory(path).await.map(|_| ())
}

/// Fail with `NotFound` unless a file lives at `path`.
pub async fn require_file(store: &EntryStore, path: &str) -> Result<(), StoreError> {
    match store.get(path).await {
        Some(entry) if entry.is_file() => Ok(()),
        _ => Err(StoreError::not_found(&path::normalize_key(path), "File")),
    }
}
