// src/commands/mod.rs
pub mod add_cmd;
pub mod cat;
pub mod cd_cmd;
pub mod clear_cmd;
pub mod common;
pub mod help_cmd;
pub mod ls;
pub mod mkdir;
pub mod pwd;
pub mod registry;
pub mod rm;
pub mod touch;
pub mod types;
pub mod wget_cmd;

pub use registry::CommandRegistry;
pub use types::{Command, CommandContext, CommandError, CommandOutput, CommandResult};
