use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandOutput, CommandResult};

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["cls"]
    }

    fn usage(&self) -> &'static str {
        "clear"
    }

    fn summary(&self) -> &'static str {
        "Clears the terminal screen (also: cls)."
    }

    // Display-only: the store is never touched.
    async fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        Ok(CommandOutput::clear())
    }
}
