//! vfs-shell - A hierarchical virtual file system driven by a command shell
//!
//! The library provides the path-indexed entry store (in memory or persisted
//! to a JSON file), the directory consistency manager, and the command
//! engine that resolves names against a session's current directory.

pub mod commands;
pub mod config;
pub mod fs;
pub mod logging;
pub mod network;
pub mod session;
pub mod shell;

pub use commands::{CommandError, CommandRegistry};
pub use fs::{Entry, EntryKind, EntryStore, StoreError};
pub use session::Session;
pub use shell::{ExecResult, Shell, ShellOptions};
