// src/commands/registry.rs
use tracing::debug;

use super::add_cmd::AddCommand;
use super::cat::CatCommand;
use super::cd_cmd::CdCommand;
use super::clear_cmd::ClearCommand;
use super::help_cmd::HelpCommand;
use super::ls::LsCommand;
use super::mkdir::MkdirCommand;
use super::pwd::PwdCommand;
use super::rm::RmCommand;
use super::touch::TouchCommand;
use super::types::{Command, CommandContext, CommandError, CommandResult};
use super::wget_cmd::WgetCommand;
use crate::session::Session;

/// The closed set of shell commands, in `help` order.
const BUILTINS: &[&dyn Command] = &[
    &HelpCommand,
    &MkdirCommand,
    &TouchCommand,
    &AddCommand,
    &LsCommand,
    &CatCommand,
    &RmCommand,
    &ClearCommand,
    &CdCommand,
    &PwdCommand,
    &WgetCommand,
];

/// Name-to-handler lookup over a fixed command table.
#[derive(Clone, Copy)]
pub struct CommandRegistry {
    commands: &'static [&'static dyn Command],
}

impl CommandRegistry {
    pub const fn builtin() -> Self {
        Self { commands: BUILTINS }
    }

    /// Handler for `name`, matching primary names and aliases.
    pub fn get(&self, name: &str) -> Option<&'static dyn Command> {
        self.commands
            .iter()
            .copied()
            .find(|c| c.name() == name || c.aliases().contains(&name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static dyn Command> {
        let commands: &'static [&'static dyn Command] = self.commands;
        commands.iter().copied()
    }

    /// Run one input line against `session`.
    ///
    /// Returns `None` for a blank line. The line is split on whitespace into a
    /// command name and arguments; there is no quoting.
    pub async fn dispatch(&self, session: &mut Session, line: &str) -> Option<CommandResult> {
        let mut words = line.split_whitespace().map(str::to_string);
        let name = words.next()?;
        let args: Vec<String> = words.collect();

        let Some(cmd) = self.get(&name) else {
            return Some(Err(CommandError::UnknownCommand(name)));
        };
        debug!(command = cmd.name(), args = ?args, cwd = session.cwd(), "dispatch");
        Some(cmd.execute(CommandContext { args, session }).await)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
