// src/commands/ls/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandOutput, CommandResult};
use crate::fs::path::file_name;

pub struct LsCommand;

const EMPTY_MESSAGE: &str = "Directory is empty.";

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn usage(&self) -> &'static str {
        "ls"
    }

    fn summary(&self) -> &'static str {
        "Lists the contents of the current directory."
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let session = &*ctx.session;
        let children = session.store().list_contents(session.cwd()).await?;
        if children.is_empty() {
            return Ok(CommandOutput::line(EMPTY_MESSAGE));
        }
        Ok(CommandOutput::lines(
            children.iter().map(|child| file_name(child).to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::EntryStore;
    use crate::session::Session;

    async fn run(session: &mut Session) -> CommandResult {
        LsCommand.execute(CommandContext { args: Vec::new(), session }).await
    }

    #[tokio::test]
    async fn test_ls_empty() {
        let mut session = Session::new(EntryStore::in_memory().await.unwrap());
        let out = run(&mut session).await.unwrap();
        assert_eq!(out.stdout, vec![EMPTY_MESSAGE]);
    }

    #[tokio::test]
    async fn test_ls_lists_names_in_creation_order() {
        let mut session = Session::new(EntryStore::in_memory().await.unwrap());
        let store = session.store().clone();
        store.create_file("root/zeta.txt", "").await.unwrap();
        store.create_file("root/alpha.txt", "").await.unwrap();
        let out = run(&mut session).await.unwrap();
        assert_eq!(out.stdout, vec!["zeta.txt", "alpha.txt"]);
    }

    #[tokio::test]
    async fn test_ls_in_subdirectory() {
        let mut session = Session::new(EntryStore::in_memory().await.unwrap());
        let store = session.store().clone();
        store.create_directory("root/docs").await.unwrap();
        store.create_file("root/docs/note.md", "").await.unwrap();
        session.set_cwd("root/docs");
        let out = run(&mut session).await.unwrap();
        assert_eq!(out.stdout, vec!["note.md"]);
    }
}
