use async_trait::async_trait;
use tracing::debug;

use crate::commands::{Command, CommandContext, CommandError, CommandOutput, CommandResult};
use crate::fs::{path, StoreError};

pub struct CdCommand;

#[async_trait]
impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn usage(&self) -> &'static str {
        "cd [dir]"
    }

    fn summary(&self) -> &'static str {
        "Changes the current directory to [dir]; 'cd ..' moves up one level."
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let target = ctx.arg(0, self.usage())?.to_string();
        let session = ctx.session;

        if target == ".." {
            if path::is_root(session.cwd()) {
                return Err(CommandError::AlreadyAtRoot);
            }
            let parent = path::parent_of(session.cwd());
            session.set_cwd(&parent);
            debug!(cwd = %parent, "changed directory");
            return Ok(CommandOutput::line(format!("Changed directory to '{}'", parent)));
        }

        let resolved = session.resolve(&target);
        match session.store().get(&resolved).await {
            Some(entry) if entry.is_directory() => {}
            Some(_) => return Err(CommandError::NotADirectory(path::normalize_key(&resolved))),
            None => {
                return Err(StoreError::not_found(&path::normalize_key(&resolved), "Directory").into())
            }
        }
        session.set_cwd(&resolved);
        debug!(cwd = %session.cwd(), "changed directory");
        Ok(CommandOutput::line(format!("Changed directory to '{}'", target)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::EntryStore;
    use crate::session::Session;

    async fn run(session: &mut Session, args: &[&str]) -> CommandResult {
        let ctx = CommandContext {
            args: args.iter().map(|s| s.to_string()).collect(),
            session,
        };
        CdCommand.execute(ctx).await
    }

    async fn session_with_docs() -> Session {
        let store = EntryStore::in_memory().await.unwrap();
        store.create_directory("root/docs").await.unwrap();
        store.create_directory("root/docs/deep").await.unwrap();
        store.create_file("root/readme.txt", "").await.unwrap();
        Session::new(store)
    }

    #[tokio::test]
    async fn test_cd_into_directory() {
        let mut session = session_with_docs().await;
        let out = run(&mut session, &["docs"]).await.unwrap();
        assert_eq!(out.stdout, vec!["Changed directory to 'docs'"]);
        assert_eq!(session.cwd(), "root/docs");
        run(&mut session, &["deep"]).await.unwrap();
        assert_eq!(session.cwd(), "root/docs/deep");
    }

    #[tokio::test]
    async fn test_cd_up() {
        let mut session = session_with_docs().await;
        session.set_cwd("root/docs/deep");
        let out = run(&mut session, &[".."]).await.unwrap();
        assert_eq!(out.stdout, vec!["Changed directory to 'root/docs'"]);
        run(&mut session, &[".."]).await.unwrap();
        assert_eq!(session.cwd(), "root");
    }

    #[tokio::test]
    async fn test_cd_up_at_root_fails() {
        let mut session = session_with_docs().await;
        let err = run(&mut session, &[".."]).await.unwrap_err();
        assert_eq!(err, CommandError::AlreadyAtRoot);
        assert_eq!(session.cwd(), "root");
    }

    #[tokio::test]
    async fn test_cd_missing_target() {
        let mut session = session_with_docs().await;
        let err = run(&mut session, &["nowhere"]).await.unwrap_err();
        assert!(matches!(err, CommandError::Store(StoreError::NotFound { .. })));
        assert_eq!(session.cwd(), "root");
    }

    #[tokio::test]
    async fn test_cd_into_file_rejected() {
        let mut session = session_with_docs().await;
        let err = run(&mut session, &["readme.txt"]).await.unwrap_err();
        assert_eq!(err, CommandError::NotADirectory("root/readme.txt".into()));
        assert_eq!(session.cwd(), "root");
    }

    #[tokio::test]
    async fn test_cd_absolute() {
        let mut session = session_with_docs().await;
        session.set_cwd("root/docs/deep");
        run(&mut session, &["/root/docs"]).await.unwrap();
        assert_eq!(session.cwd(), "root/docs");
    }

    #[tokio::test]
    async fn test_cd_missing_operand() {
        let mut session = session_with_docs().await;
        let err = run(&mut session, &[]).await.unwrap_err();
        assert_eq!(err, CommandError::Usage("cd [dir]"));
    }
}
