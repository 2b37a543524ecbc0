use async_trait::async_trait;
use tracing::warn;

use crate::commands::common::require_absent;
use crate::commands::{Command, CommandContext, CommandError, CommandOutput, CommandResult};
use crate::fs::consistency;
use crate::network::{fetch_text, NetworkError};
use crate::session::Session;

pub struct WgetCommand;

#[async_trait]
impl Command for WgetCommand {
    fn name(&self) -> &'static str {
        "wget"
    }

    fn usage(&self) -> &'static str {
        "wget [url] [filename]"
    }

    fn summary(&self) -> &'static str {
        "Fetches the content at [url] and saves it to a file named [filename]."
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.args.len() < 2 {
            return Err(CommandError::Usage(self.usage()));
        }
        let url = &ctx.args[0];
        let file_name = &ctx.args[1];
        let path = ctx.session.resolve(file_name);

        require_absent(ctx.session.store(), &path).await?;

        let mut out = CommandOutput::line(format!("Fetching content from '{}'...", url));
        // Fetch and save failures are reported inline, never raised.
        match download(ctx.session, url, &path).await {
            Ok(()) => out.push(format!("Content from '{}' saved to '{}'.", url, file_name)),
            Err(e) => {
                warn!(url = %url, error = %e, "wget failed");
                out.push_error(format!("Error: {}", e));
            }
        }
        Ok(out)
    }
}

async fn download(session: &Session, url: &str, path: &str) -> Result<(), CommandError> {
    let fetch_fn = session.fetch_fn().ok_or(NetworkError::NotConfigured)?;
    let response = fetch_text(session.network(), fetch_fn, url).await?;
    let store = session.store();
    store.create_file(path, &response.body).await?;
    consistency::register_child(store, path).await?;
    Ok(())
}
