//! Shell Session
//!
//! Per-session state threaded through every command call: the current
//! directory, the shared store handle, and network access.

use crate::fs::{path, EntryStore, ROOT};
use crate::network::{FetchFn, NetworkConfig};

pub struct Session {
    cwd: String,
    store: EntryStore,
    fetch_fn: Option<FetchFn>,
    network: NetworkConfig,
}

impl Session {
    /// A session positioned at the root directory.
    pub fn new(store: EntryStore) -> Self {
        Self {
            cwd: ROOT.to_string(),
            store,
            fetch_fn: None,
            network: NetworkConfig::default(),
        }
    }

    pub fn with_fetch(mut self, fetch_fn: FetchFn, network: NetworkConfig) -> Self {
        self.fetch_fn = Some(fetch_fn);
        self.network = network;
        self
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Move to `dir`, stored as a normalized key.
    pub fn set_cwd(&mut self, dir: &str) {
        self.cwd = path::normalize_key(dir);
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn fetch_fn(&self) -> Option<&FetchFn> {
        self.fetch_fn.as_ref()
    }

    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    /// Resolve a user-supplied name against the current directory.
    pub fn resolve(&self, raw_name: &str) -> String {
        path::resolve(&self.cwd, raw_name)
    }
}
