//! Entry Store Types
//!
//! Core records, errors, and the storage backend trait for the virtual
//! file system.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Key of the root directory entry.
pub const ROOT: &str = "root";

/// Path separator used inside store keys.
pub const SEPARATOR: char = '/';

/// Entry store errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Path already exists: '{path}'")]
    AlreadyExists { path: String },

    #[error("{what} not found: '{path}'")]
    NotFound { path: String, what: &'static str },

    #[error("Parent directory does not exist: '{path}'")]
    ParentMissing { path: String },

    #[error("Directory is not empty: '{path}'")]
    DirectoryNotEmpty { path: String },

    #[error("The root directory cannot be deleted")]
    RootProtected,

    #[error("Storage I/O failed for '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Storage format error: {message}")]
    Serialization { message: String },
}

impl StoreError {
    pub fn not_found(path: &str, what: &'static str) -> Self {
        StoreError::NotFound { path: path.to_string(), what }
    }

    pub fn already_exists(path: &str) -> Self {
        StoreError::AlreadyExists { path: path.to_string() }
    }
}

/// The two kinds of entry. Immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Directory => write!(f, "directory"),
            EntryKind::File => write!(f, "file"),
        }
    }
}

/// Kind-specific payload of an entry.
///
/// Serialized with an inline `type` tag so a record reads as
/// `{"path": "root/a", "type": "directory", "contents": []}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EntryNode {
    Directory {
        #[serde(rename = "contents", default)]
        children: Vec<String>,
    },
    File {
        #[serde(default)]
        content: String,
    },
}

/// A persisted record, keyed by its absolute path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub path: String,
    #[serde(flatten)]
    pub node: EntryNode,
}

impl Entry {
    /// A new directory with no children.
    pub fn directory(path: impl Into<String>) -> Self {
        Entry {
            path: path.into(),
            node: EntryNode::Directory { children: Vec::new() },
        }
    }

    /// A new file holding `content`.
    pub fn file(path: impl Into<String>, content: impl Into<String>) -> Self {
        Entry {
            path: path.into(),
            node: EntryNode::File { content: content.into() },
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self.node {
            EntryNode::Directory { .. } => EntryKind::Directory,
            EntryNode::File { .. } => EntryKind::File,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self.node, EntryNode::File { .. })
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.node, EntryNode::Directory { .. })
    }

    /// Child listing, `None` for files.
    pub fn children(&self) -> Option<&[String]> {
        match &self.node {
            EntryNode::Directory { children } => Some(children),
            EntryNode::File { .. } => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<String>> {
        match &mut self.node {
            EntryNode::Directory { children } => Some(children),
            EntryNode::File { .. } => None,
        }
    }

    /// File payload, `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match &self.node {
            EntryNode::File { content } => Some(content),
            EntryNode::Directory { .. } => None,
        }
    }
}

/// One logical table of entries keyed by absolute path.
///
/// Every method is a single unit of work. Sequences of calls (a get followed
/// by a put) are not transactional.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Fetch a copy of the record at `key`.
    async fn get(&self, key: &str) -> Option<Entry>;

    /// Add a new record; fails with `AlreadyExists` if the key is taken.
    async fn insert(&self, entry: Entry) -> Result<(), StoreError>;

    /// Insert or replace a record.
    async fn put(&self, entry: Entry) -> Result<(), StoreError>;

    /// Remove a record. Removing a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// All keys, in insertion order.
    async fn keys(&self) -> Vec<String>;
}
