use async_trait::async_trait;
use crate::commands::registry::CommandRegistry;
use crate::commands::{Command, CommandContext, CommandOutput, CommandResult};

pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str { "help" }

    fn usage(&self) -> &'static str { "help" }

    fn summary(&self) -> &'static str { "Displays this list of commands." }

    async fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        let mut out = CommandOutput::line("Available Commands:");
        for cmd in CommandRegistry::builtin().iter() {
            out.push(format!("  {:<24}{}", cmd.usage(), cmd.summary()));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::EntryStore;
    use crate::session::Session;

    #[tokio::test]
    async fn test_list_commands() {
        let mut session = Session::new(EntryStore::in_memory().await.unwrap());
        let out = HelpCommand
            .execute(CommandContext { args: Vec::new(), session: &mut session })
            .await
            .unwrap();
        assert_eq!(out.stdout[0], "Available Commands:");
        let text = out.stdout.join("\n");
        for usage in ["mkdir [name]", "add [file] [content]", "cd [dir]", "wget [url] [filename]"] {
            assert!(text.contains(usage), "missing {}", usage);
        }
        assert!(text.contains("cls"));
        assert_eq!(out.stdout.len(), 1 + CommandRegistry::builtin().iter().count());
    }
}
