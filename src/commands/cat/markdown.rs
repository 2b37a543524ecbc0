// src/commands/cat/markdown.rs
//! Minimal markup-to-HTML rendering for `cat`.
//!
//! A fixed, ordered list of pattern substitutions. Order matters: bold runs
//! before italic, images before links.

use regex_lite::Regex;

/// Extensions rendered as markup.
const MARKUP_EXTENSIONS: &[&str] = &[".md", ".markdown"];

lazy_static::lazy_static! {
    static ref SUBSTITUTIONS: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"(?m)^# (.+)").unwrap(), "<h1>$1</h1>"),
        (Regex::new(r"(?m)^## (.+)").unwrap(), "<h2>$1</h2>"),
        (Regex::new(r"(?m)^### (.+)").unwrap(), "<h3>$1</h3>"),
        (Regex::new(r"\*\*(.+?)\*\*").unwrap(), "<strong>$1</strong>"),
        (Regex::new(r"\*(.+?)\*").unwrap(), "<em>$1</em>"),
        (Regex::new(r"!\[(.*?)\]\((.+?)\)").unwrap(), r#"<img alt="$1" src="$2" />"#),
        (Regex::new(r"\[(.+?)\]\((.+?)\)").unwrap(), r#"<a href="$2" target="_blank">$1</a>"#),
    ];
}

pub fn is_markup_name(name: &str) -> bool {
    MARKUP_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Replace every newline with a `<br>` tag.
pub fn render_line_breaks(text: &str) -> String {
    text.replace('\n', "<br>")
}

/// Apply the markup substitutions, then line breaks.
pub fn render_markdown(text: &str) -> String {
    let mut rendered = text.to_string();
    for (pattern, replacement) in SUBSTITUTIONS.iter() {
        rendered = pattern.replace_all(&rendered, *replacement).into_owned();
    }
    render_line_breaks(&rendered)
}
