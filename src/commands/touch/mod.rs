// src/commands/touch/mod.rs
use async_trait::async_trait;
use tracing::info;

use crate::commands::common::{require_absent, require_parent_directory};
use crate::commands::{Command, CommandContext, CommandOutput, CommandResult};
use crate::fs::consistency;

pub struct TouchCommand;

#[async_trait]
impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn usage(&self) -> &'static str {
        "touch [name]"
    }

    fn summary(&self) -> &'static str {
        "Creates a new empty file named [name]."
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let name = ctx.arg(0, self.usage())?;
        let path = ctx.session.resolve(name);
        let store = ctx.session.store();

        require_absent(store, &path).await?;
        require_parent_directory(store, &path).await?;
        store.create_file(&path, "").await?;
        consistency::register_child(store, &path).await?;

        info!(path = %path, "file created");
        Ok(CommandOutput::line(format!("File '{}' created.", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandError;
    use crate::fs::{EntryStore, StoreError};
    use crate::session::Session;

    async fn run(session: &mut Session, args: &[&str]) -> CommandResult {
        let ctx = CommandContext {
            args: args.iter().map(|s| s.to_string()).collect(),
            session,
        };
        TouchCommand.execute(ctx).await
    }

    #[tokio::test]
    async fn test_touch_creates_empty_file() {
        let mut session = Session::new(EntryStore::in_memory().await.unwrap());
        let out = run(&mut session, &["a.txt"]).await.unwrap();
        assert_eq!(out.stdout, vec!["File 'a.txt' created."]);
        assert_eq!(session.store().read_file("root/a.txt").await.unwrap(), "");
        assert_eq!(session.store().list_contents("root").await.unwrap(), vec!["root/a.txt"]);
    }

    #[tokio::test]
    async fn test_touch_existing_fails() {
        let mut session = Session::new(EntryStore::in_memory().await.unwrap());
        session.store().create_file("root/a.txt", "keep").await.unwrap();
        let err = run(&mut session, &["a.txt"]).await.unwrap_err();
        assert!(matches!(err, CommandError::Store(StoreError::AlreadyExists { .. })));
        assert_eq!(session.store().read_file("root/a.txt").await.unwrap(), "keep");
    }

    #[tokio::test]
    async fn test_touch_missing_operand() {
        let mut session = Session::new(EntryStore::in_memory().await.unwrap());
        let err = run(&mut session, &[]).await.unwrap_err();
        assert_eq!(err, CommandError::Usage("touch [name]"));
    }

    #[tokio::test]
    async fn test_touch_under_missing_directory() {
        let mut session = Session::new(EntryStore::in_memory().await.unwrap());
        let err = run(&mut session, &["nope/a.txt"]).await.unwrap_err();
        assert!(matches!(err, CommandError::Store(StoreError::ParentMissing { .. })));
    }
}
