// src/commands/pwd/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandOutput, CommandResult};

pub struct PwdCommand;

#[async_trait]
impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn usage(&self) -> &'static str {
        "pwd"
    }

    fn summary(&self) -> &'static str {
        "Prints the current directory."
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        Ok(CommandOutput::line(ctx.session.cwd()))
    }
}
