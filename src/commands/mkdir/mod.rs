// src/commands/mkdir/mod.rs
use async_trait::async_trait;
use tracing::info;

use crate::commands::common::{require_absent, require_parent_directory};
use crate::commands::{Command, CommandContext, CommandOutput, CommandResult};
use crate::fs::consistency;

pub struct MkdirCommand;

#[async_trait]
impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn usage(&self) -> &'static str {
        "mkdir [name]"
    }

    fn summary(&self) -> &'static str {
        "Creates a new directory named [name]."
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let name = ctx.arg(0, self.usage())?;
        let path = ctx.session.resolve(name);
        let store = ctx.session.store();

        require_absent(store, &path).await?;
        require_parent_directory(store, &path).await?;
        store.create_directory(&path).await?;
        consistency::register_child(store, &path).await?;

        info!(path = %path, "directory created");
        Ok(CommandOutput::line(format!("Directory '{}' created.", name)))
    }
}
