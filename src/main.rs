use std::io::IsTerminal;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use vfs_shell::config::ShellConfig;
use vfs_shell::logging::init_tracing;
use vfs_shell::{EntryStore, ExecResult, Shell, ShellOptions};

const CLEAR_SEQUENCE: &str = "\x1B[2J\x1B[H";

#[derive(Parser)]
#[command(name = "vfs-shell")]
#[command(about = "A single-user virtual file system with a command shell")]
#[command(version)]
struct Cli {
    /// Run this command line and exit (repeatable, runs in order)
    #[arg(short = 'c')]
    commands: Vec<String>,

    /// TOML config file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// JSON store file (overrides the config file; omit for in-memory)
    #[arg(long = "store")]
    store: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (e.g. "debug")
    #[arg(long = "log-level")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let config = match &cli.config {
        Some(path) => match ShellConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => ShellConfig::default(),
    };

    let store_path = cli.store.or(config.store_path);
    let store = match &store_path {
        Some(path) => {
            info!(path = %path.display(), "using JSON store");
            EntryStore::json_file(path).await
        }
        None => EntryStore::in_memory().await,
    };
    let store = match store {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // No HTTP transport is bundled; wget reports that network access is
    // not configured.
    let options = ShellOptions {
        store: Some(store),
        prompt: config.prompt,
        fetch_fn: None,
        network: config.network,
    };
    let mut shell = match Shell::new(options).await {
        Ok(shell) => shell,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if !cli.commands.is_empty() {
        let mut exit_code = 0;
        for line in &cli.commands {
            let result = shell.exec(line).await;
            print_result(&result);
            if result.exit_code != 0 {
                exit_code = result.exit_code;
            }
        }
        std::process::exit(exit_code);
    }

    let interactive = std::io::stdin().is_terminal();
    if interactive {
        println!("Welcome to WebTerminal OS!");
        println!("Type 'help' for a list of commands.");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if interactive {
            print!("{}", shell.prompt());
            let _ = std::io::stdout().flush();
        }
        match lines.next_line().await {
            Ok(Some(line)) => {
                let result = shell.exec(&line).await;
                print_result(&result);
            }
            Ok(None) => break,
            Err(e) => {
                eprintln!("Error: Cannot read input: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn print_result(result: &ExecResult) {
    if result.cleared {
        print!("{}", CLEAR_SEQUENCE);
    }
    if !result.stdout.is_empty() {
        print!("{}", result.stdout);
    }
    if !result.stderr.is_empty() {
        eprint!("{}", result.stderr);
    }
    let _ = std::io::stdout().flush();
}
