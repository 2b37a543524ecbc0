//! Virtual File System Module
//!
//! Path-indexed entries with directory/file semantics:
//! - path: pure key resolution
//! - memory / json_file: storage backends (one table keyed by path)
//! - store: entry operations over a backend
//! - consistency: parent listing maintenance

pub mod consistency;
pub mod json_file;
pub mod memory;
pub mod path;
pub mod store;
pub mod types;

pub use json_file::JsonFileBackend;
pub use memory::InMemoryBackend;
pub use store::EntryStore;
pub use types::*;
