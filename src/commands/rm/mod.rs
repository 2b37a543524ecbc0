// src/commands/rm/mod.rs
use async_trait::async_trait;
use tracing::info;

use crate::commands::{Command, CommandContext, CommandOutput, CommandResult};

pub struct RmCommand;

#[async_trait]
impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn usage(&self) -> &'static str {
        "rm [name]"
    }

    fn summary(&self) -> &'static str {
        "Deletes the file or empty directory [name]."
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let name = ctx.arg(0, self.usage())?;
        let path = ctx.session.resolve(name);
        ctx.session.store().delete_entry(&path).await?;
        info!(path = %path, "entry deleted");
        Ok(CommandOutput::line(format!("'{}' deleted.", name)))
    }
}
