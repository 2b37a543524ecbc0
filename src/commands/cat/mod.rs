// src/commands/cat/mod.rs
pub mod markdown;

use async_trait::async_trait;

use crate::commands::common::require_file;
use crate::commands::{Command, CommandContext, CommandOutput, CommandResult};
use markdown::{is_markup_name, render_line_breaks, render_markdown};

pub struct CatCommand;

#[async_trait]
impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn usage(&self) -> &'static str {
        "cat [name]"
    }

    fn summary(&self) -> &'static str {
        "Displays the content of the file [name]; .md files are rendered."
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let name = ctx.arg(0, self.usage())?;
        let path = ctx.session.resolve(name);
        let store = ctx.session.store();

        require_file(store, &path).await?;
        let data = store.read_file(&path).await?;

        let rendered = if is_markup_name(name) {
            render_markdown(&data)
        } else {
            render_line_breaks(&data)
        };
        Ok(CommandOutput::line(rendered))
    }
}
