//! Format-conversion pipeline: a pure mapping from (note, options) to one
//! output string per export format.
//!
//! The core is synchronous and side-effect-free. Calling [`render`] twice
//! with identical inputs yields byte-identical output, except for the JSON
//! format's `exported_at` field which is intentionally time-varying.

mod html;
mod json;
mod rtf;
mod strip;
mod template;
mod wrap;

pub use html::markdown_to_html;
pub use json::to_json;
pub use rtf::to_rtf;
pub use strip::strip;
pub use template::render_document;
pub use wrap::wrap;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use thiserror::Error;

use crate::domain::Note;

/// Errors from the export surface.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A format selector outside the five supported representations.
    /// Fatal to the single invocation; never retried.
    #[error("unsupported export format: {0}")]
    UnsupportedFormat(String),
}

/// The five supported export representations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Markdown pass-through with optional preamble
    #[default]
    #[value(name = "md")]
    Markdown,
    /// Plain text with markdown syntax stripped, optionally wrapped
    #[value(name = "txt")]
    Text,
    /// Complete standalone HTML5 document
    #[value(name = "html")]
    Html,
    /// Pretty-printed JSON object
    #[value(name = "json")]
    Json,
    /// Complete RTF 1.0 document
    #[value(name = "rtf")]
    Rtf,
}

impl ExportFormat {
    /// File extension for the format; doubles as its identifier.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Text => "txt",
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
            ExportFormat::Rtf => "rtf",
        }
    }

    /// Human-readable name for the format.
    pub fn display_name(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "Markdown",
            ExportFormat::Text => "Plain Text",
            ExportFormat::Html => "HTML",
            ExportFormat::Json => "JSON",
            ExportFormat::Rtf => "Rich Text Format",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md" => Ok(ExportFormat::Markdown),
            "txt" => Ok(ExportFormat::Text),
            "html" => Ok(ExportFormat::Html),
            "json" => Ok(ExportFormat::Json),
            "rtf" => Ok(ExportFormat::Rtf),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// User-selectable inclusion options for one export invocation.
///
/// Constructed fresh per export and immutable for its duration; passed
/// explicitly rather than held in ambient configuration. `wrap_width` is
/// consulted only by the text format; 0 means no wrapping.
/// `include_metadata` only affects the JSON format.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_title: bool,
    pub include_tags: bool,
    pub include_timestamps: bool,
    pub include_metadata: bool,
    pub wrap_width: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Markdown,
            include_title: true,
            include_tags: true,
            include_timestamps: true,
            include_metadata: false,
            wrap_width: 0,
        }
    }
}

/// Renders a note into the representation selected by `options.format`.
///
/// Total over any well-formed note: empty content, empty tags, and missing
/// timestamps all render; malformed markdown degrades to literal text.
/// The markdown format is pass-through — with every preamble flag off its
/// output equals `note.content()` exactly.
pub fn render(note: &Note, options: &ExportOptions) -> String {
    match options.format {
        ExportFormat::Markdown => render_markdown(note, options),
        ExportFormat::Text => render_text(note, options),
        ExportFormat::Html => {
            let body = markdown_to_html(note.content());
            render_document(note, options, &body)
        }
        ExportFormat::Json => to_json(note, options),
        ExportFormat::Rtf => to_rtf(note, options),
    }
}

/// Markdown export: raw content behind an optional front-matter-like
/// preamble. None of the body renderers run here.
fn render_markdown(note: &Note, options: &ExportOptions) -> String {
    let mut blocks = preamble_blocks(note, options, |title| format!("# {title}"));
    blocks.push(note.content().to_string());
    blocks.join("\n\n")
}

/// Plain-text export: setext-style underlined title, stripped body,
/// optional wrapping.
fn render_text(note: &Note, options: &ExportOptions) -> String {
    let mut blocks = preamble_blocks(note, options, |title| {
        format!("{}\n{}", title, "=".repeat(title.chars().count()))
    });
    blocks.push(wrap(&strip(note.content()), options.wrap_width));
    blocks.join("\n\n")
}

/// Shared preamble assembly for the textual formats. Each block is later
/// joined with a blank line; the title block's shape is format-specific.
fn preamble_blocks(
    note: &Note,
    options: &ExportOptions,
    title_block: impl Fn(&str) -> String,
) -> Vec<String> {
    let mut blocks = Vec::new();

    if options.include_title {
        blocks.push(title_block(note.title()));
    }
    if options.include_tags && !note.tags().is_empty() {
        blocks.push(format!("Tags: {}", note.tags().join(", ")));
    }
    if options.include_timestamps {
        let mut lines = Vec::new();
        if let Some(created) = note.created() {
            lines.push(format!("Created: {}", created.format("%Y-%m-%d %H:%M")));
        }
        if let Some(updated) = note.updated() {
            lines.push(format!("Updated: {}", updated.format("%Y-%m-%d %H:%M")));
        }
        if !lines.is_empty() {
            blocks.push(lines.join("\n"));
        }
    }

    blocks
}
