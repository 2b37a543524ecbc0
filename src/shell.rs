//! Shell Environment
//!
//! Main entry point for the command shell. Ties together the session, the
//! command registry, and the display buffer.

use crate::commands::{CommandError, CommandRegistry};
use crate::fs::{EntryStore, StoreError};
use crate::network::{FetchFn, NetworkConfig};
use crate::session::Session;

const DEFAULT_PROMPT: &str = "> ";

/// Lines kept in the display buffer; older lines scroll off.
pub const DISPLAY_LIMIT: usize = 1000;

/// Exit code for a failed command.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for a name with no handler.
pub const EXIT_UNKNOWN_COMMAND: i32 = 127;

/// Options for creating a Shell.
#[derive(Default)]
pub struct ShellOptions {
    /// Store instance (defaults to a fresh in-memory store)
    pub store: Option<EntryStore>,
    /// Prompt echoed into the display buffer before each line
    pub prompt: Option<String>,
    /// Transport for `wget`
    pub fetch_fn: Option<FetchFn>,
    pub network: NetworkConfig,
}

/// Result of one input line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    /// The display buffer was wiped by this line.
    pub cleared: bool,
}

/// A single interactive shell over one session.
pub struct Shell {
    session: Session,
    registry: CommandRegistry,
    prompt: String,
    display: Vec<String>,
}

impl Shell {
    /// Create a new Shell positioned at the root directory.
    pub async fn new(options: ShellOptions) -> Result<Self, StoreError> {
        let store = match options.store {
            Some(store) => store,
            None => EntryStore::in_memory().await?,
        };
        let mut session = Session::new(store);
        if let Some(fetch_fn) = options.fetch_fn {
            session = session.with_fetch(fetch_fn, options.network);
        }
        Ok(Self {
            session,
            registry: CommandRegistry::builtin(),
            prompt: options.prompt.unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
            display: Vec::new(),
        })
    }

    /// Execute one input line. Failures are rendered as a single
    /// `Error: <message>` line and never escape.
    pub async fn exec(&mut self, line: &str) -> ExecResult {
        self.display.push(format!("{}{}", self.prompt, line.trim()));

        let result = match self.registry.dispatch(&mut self.session, line).await {
            None => return ExecResult::default(),
            Some(result) => result,
        };

        let exec = match result {
            Ok(output) => {
                if output.clear_screen {
                    self.display.clear();
                }
                ExecResult {
                    stdout: join_lines(&output.stdout),
                    stderr: join_lines(&output.stderr),
                    exit_code: 0,
                    cleared: output.clear_screen,
                }
            }
            Err(e) => {
                let exit_code = match e {
                    CommandError::UnknownCommand(_) => EXIT_UNKNOWN_COMMAND,
                    _ => EXIT_FAILURE,
                };
                ExecResult {
                    stdout: String::new(),
                    stderr: format!("Error: {}\n", e),
                    exit_code,
                    cleared: false,
                }
            }
        };

        self.display.extend(exec.stdout.lines().map(str::to_string));
        self.display.extend(exec.stderr.lines().map(str::to_string));
        if self.display.len() > DISPLAY_LIMIT {
            let overflow = self.display.len() - DISPLAY_LIMIT;
            self.display.drain(..overflow);
        }
        exec
    }

    pub fn cwd(&self) -> &str {
        self.session.cwd()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn store(&self) -> &EntryStore {
        self.session.store()
    }

    /// Lines currently shown, including echoed prompts. Holds at most
    /// [`DISPLAY_LIMIT`] lines.
    pub fn display(&self) -> &[String] {
        &self.display
    }
}

fn join_lines(lines: &[String]) -> String {
    lines.iter().map(|l| format!("{}\n", l)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn new_shell() -> Shell {
        Shell::new(ShellOptions::default()).await.unwrap()
    }

    #[tokio::test]
    async fn test_docs_scenario() {
        let mut shell = new_shell().await;
        assert_eq!(shell.exec("mkdir docs").await.stdout, "Directory 'docs' created.\n");
        assert_eq!(shell.exec("ls").await.stdout, "docs\n");
        shell.exec("cd docs").await;
        assert_eq!(shell.cwd(), "root/docs");
        shell.exec("touch note.md").await;
        shell.exec("add note.md # Title").await;
        let rendered = shell.exec("cat note.md").await;
        assert_eq!(rendered.stdout, "<br><h1>Title</h1>\n");

        shell.exec("touch note.txt").await;
        shell.exec("add note.txt # Title").await;
        assert_eq!(shell.exec("cat note.txt").await.stdout, "<br># Title\n");
    }

    #[tokio::test]
    async fn test_cd_up_at_root() {
        let mut shell = new_shell().await;
        let result = shell.exec("cd ..").await;
        assert_eq!(result.stderr, "Error: Already at root directory.\n");
        assert_eq!(result.exit_code, EXIT_FAILURE);
        assert_eq!(shell.cwd(), "root");
    }

    #[tokio::test]
    async fn test_rm_non_empty_directory_keeps_both() {
        let mut shell = new_shell().await;
        shell.exec("mkdir docs").await;
        shell.exec("cd docs").await;
        shell.exec("touch note.md").await;
        shell.exec("cd ..").await;

        let result = shell.exec("rm docs").await;
        assert_eq!(result.stderr, "Error: Directory is not empty: 'root/docs'\n");
        assert!(shell.store().exists("root/docs").await);
        assert!(shell.store().exists("root/docs/note.md").await);
    }

    #[tokio::test]
    async fn test_failures_do_not_end_session() {
        let mut shell = new_shell().await;
        let unknown = shell.exec("frobnicate now").await;
        assert_eq!(unknown.stderr, "Error: Unknown command: frobnicate\n");
        assert_eq!(unknown.exit_code, EXIT_UNKNOWN_COMMAND);

        let usage = shell.exec("mkdir").await;
        assert_eq!(usage.stderr, "Error: Usage: mkdir [name]\n");

        let ok = shell.exec("mkdir later").await;
        assert_eq!(ok.exit_code, 0);
        assert!(shell.store().exists("root/later").await);
    }

    #[tokio::test]
    async fn test_absolute_names_outside_root_are_rejected() {
        let mut shell = new_shell().await;
        let result = shell.exec("mkdir /foo").await;
        assert_eq!(result.stderr, "Error: Parent directory does not exist: '/'\n");
        assert_eq!(result.exit_code, EXIT_FAILURE);
        let result = shell.exec("touch /bar.txt").await;
        assert_eq!(result.stderr, "Error: Parent directory does not exist: '/'\n");
        assert_eq!(shell.exec("ls").await.stdout, "Directory is empty.\n");

        assert_eq!(shell.exec("mkdir /root/ok").await.exit_code, 0);
        assert_eq!(shell.exec("ls").await.stdout, "ok\n");
        assert_eq!(shell.exec("rm ok").await.exit_code, 0);
    }

    #[tokio::test]
    async fn test_blank_line_is_noop() {
        let mut shell = new_shell().await;
        assert_eq!(shell.exec("   ").await, ExecResult::default());
    }

    #[tokio::test]
    async fn test_display_buffer_and_clear() {
        let mut shell = new_shell().await;
        shell.exec("mkdir a").await;
        assert_eq!(shell.display(), &["> mkdir a", "Directory 'a' created."]);

        let result = shell.exec("cls").await;
        assert!(result.cleared);
        assert!(shell.display().is_empty());
        assert_eq!(shell.store().list_contents("root").await.unwrap(), vec!["root/a"]);
    }

    #[tokio::test]
    async fn test_display_buffer_is_capped() {
        let mut shell = new_shell().await;
        for _ in 0..DISPLAY_LIMIT {
            shell.exec("pwd").await;
        }
        shell.exec("mkdir last").await;
        let display = shell.display();
        assert_eq!(display.len(), DISPLAY_LIMIT);
        assert_eq!(display[DISPLAY_LIMIT - 2], "> mkdir last");
        assert_eq!(display[DISPLAY_LIMIT - 1], "Directory 'last' created.");
    }

    #[tokio::test]
    async fn test_two_shells_share_one_store() {
        let store = EntryStore::in_memory().await.unwrap();
        let mut first = Shell::new(ShellOptions { store: Some(store.clone()), ..Default::default() })
            .await
            .unwrap();
        let mut second = Shell::new(ShellOptions { store: Some(store), ..Default::default() })
            .await
            .unwrap();

        first.exec("mkdir shared").await;
        first.exec("cd shared").await;
        assert_eq!(second.exec("ls").await.stdout, "shared\n");
        assert_eq!(second.cwd(), "root");
        assert_eq!(first.cwd(), "root/shared");
    }

    #[tokio::test]
    async fn test_help_lists_commands() {
        let mut shell = new_shell().await;
        let result = shell.exec("help").await;
        assert!(result.stdout.starts_with("Available Commands:\n"));
        assert!(result.stdout.contains("wget [url] [filename]"));
    }
}
