// src/commands/types.rs
use async_trait::async_trait;
use thiserror::Error;

use crate::fs::StoreError;
use crate::network::NetworkError;
use crate::session::Session;

/// Failure of a single command invocation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Already at root directory.")]
    AlreadyAtRoot,

    #[error("Not a directory: '{0}'")]
    NotADirectory(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

/// Lines produced by a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: Vec<String>,
    /// Errors that were caught and reported without failing the command.
    pub stderr: Vec<String>,
    /// Ask the front end to wipe its display buffer.
    pub clear_screen: bool,
}

impl CommandOutput {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn line(text: impl Into<String>) -> Self {
        Self { stdout: vec![text.into()], ..Self::default() }
    }

    pub fn lines(lines: impl IntoIterator<Item = String>) -> Self {
        Self { stdout: lines.into_iter().collect(), ..Self::default() }
    }

    pub fn clear() -> Self {
        Self { clear_screen: true, ..Self::default() }
    }

    pub fn push(&mut self, text: impl Into<String>) {
        self.stdout.push(text.into());
    }

    pub fn push_error(&mut self, text: impl Into<String>) {
        self.stderr.push(text.into());
    }
}

pub type CommandResult = Result<CommandOutput, CommandError>;

/// Command execution context
pub struct CommandContext<'a> {
    pub args: Vec<String>,
    pub session: &'a mut Session,
}

impl CommandContext<'_> {
    /// Argument at `index`, or the command's usage error.
    pub fn arg(&self, index: usize, usage: &'static str) -> Result<&str, CommandError> {
        self.args
            .get(index)
            .map(String::as_str)
            .ok_or(CommandError::Usage(usage))
    }
}

/// A shell command
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    /// Other names dispatching to this command.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Expected invocation form, e.g. `mkdir [name]`.
    fn usage(&self) -> &'static str;

    /// One-line description for `help`.
    fn summary(&self) -> &'static str;

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CommandError::Usage("mkdir [name]").to_string(), "Usage: mkdir [name]");
        assert_eq!(CommandError::AlreadyAtRoot.to_string(), "Already at root directory.");
        assert_eq!(
            CommandError::UnknownCommand("frob".into()).to_string(),
            "Unknown command: frob"
        );
        let store_err: CommandError = StoreError::already_exists("root/a").into();
        assert_eq!(store_err.to_string(), "Path already exists: 'root/a'");
    }

    #[test]
    fn test_output_builders() {
        let mut out = CommandOutput::line("a");
        out.push("b");
        out.push_error("oops");
        assert_eq!(out.stdout, vec!["a", "b"]);
        assert_eq!(out.stderr, vec!["oops"]);
        assert!(!out.clear_screen);
        assert!(CommandOutput::clear().clear_screen);
        assert!(CommandOutput::empty().stdout.is_empty());
    }
}
