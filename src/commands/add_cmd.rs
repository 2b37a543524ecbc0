use async_trait::async_trait;
use tracing::debug;

use crate::commands::common::require_file;
use crate::commands::{Command, CommandContext, CommandError, CommandOutput, CommandResult};

pub struct AddCommand;

#[async_trait]
impl Command for AddCommand {
    fn name(&self) -> &'static str {
        "add"
    }

    fn usage(&self) -> &'static str {
        "add [file] [content]"
    }

    fn summary(&self) -> &'static str {
        "Appends [content] to the file [file] on a new line."
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.args.len() < 2 {
            return Err(CommandError::Usage(self.usage()));
        }
        let name = &ctx.args[0];
        let addition = ctx.args[1..].join(" ");
        let path = ctx.session.resolve(name);
        let store = ctx.session.store();

        require_file(store, &path).await?;
        let mut content = store.read_file(&path).await?;
        content.push('\n');
        content.push_str(&addition);
        store.write_file(&path, &content).await?;

        debug!(path = %path, appended = addition.len(), "content added");
        Ok(CommandOutput::line(format!("Content added to '{}'", name)))
    }
}
