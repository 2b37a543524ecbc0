//! Directory Consistency Manager
//!
//! Keeps a directory's child listing aligned with the entries that exist
//! beneath it. Both operations are idempotent and skip silently when the
//! parent is missing or is not a directory.

use tracing::{debug, warn};

use super::path::{is_within_root, normalize_key, parent_of};
use super::store::EntryStore;
use super::types::{StoreError, ROOT};

/// List `path` in its parent directory. Returns whether the listing changed.
pub async fn register_child(store: &EntryStore, path: &str) -> Result<bool, StoreError> {
    let key = normalize_key(path);
    if key == ROOT {
        return Ok(false);
    }
    if !is_within_root(&key) {
        warn!(path = %key, "outside the root tree, listing not updated");
        return Ok(false);
    }
    let parent_key = parent_of(&key);
    let Some(mut parent) = store.get(&parent_key).await else {
        warn!(path = %key, parent = %parent_key, "parent missing, listing not updated");
        return Ok(false);
    };
    let Some(children) = parent.children_mut() else {
        warn!(path = %key, parent = %parent_key, "parent is not a directory, listing not updated");
        return Ok(false);
    };
    if children.iter().any(|c| *c == key) {
        return Ok(false);
    }

    children.push(key.clone());
    debug!(path = %key, parent = %parent_key, "registered child");
    store.put_record(parent).await?;
    Ok(true)
}

/// Drop `path` from its parent directory. Returns whether the listing changed.
pub async fn unregister_child(store: &EntryStore, path: &str) -> Result<bool, StoreError> {
    let key = normalize_key(path);
    let parent_key = parent_of(&key);
    let Some(mut parent) = store.get(&parent_key).await else {
        return Ok(false);
    };
    let Some(children) = parent.children_mut() else {
        return Ok(false);
    };
    let before = children.len();
    children.retain(|c| *c != key);
    if children.len() == before {
        return Ok(false);
    }

    debug!(path = %key, parent = %parent_key, "unregistered child");
    store.put_record(parent).await?;
    Ok(true)
}
