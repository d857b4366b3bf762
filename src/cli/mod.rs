//! CLI argument definitions.

pub mod handlers;

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::export::ExportFormat;

/// noteport - export a markdown note to md, txt, html, json, or rtf
#[derive(Parser, Debug)]
#[command(name = "noteport", version, about, long_about = None)]
pub struct Cli {
    /// Markdown note file, with optional YAML frontmatter
    /// (title, tags, created, updated)
    pub file: PathBuf,

    /// Export format
    #[arg(short = 'F', long = "format", value_enum, default_value_t = ExportFormat::Markdown)]
    pub format: ExportFormat,

    /// Output file or directory (stdout if not specified).
    /// A directory gets a filename derived from the note title.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the note title
    #[arg(long)]
    pub title: Option<String>,

    /// Tag for the note, replacing any frontmatter tags
    /// (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,

    /// Omit the title from the output
    #[arg(long)]
    pub no_title: bool,

    /// Omit tags from the output
    #[arg(long)]
    pub no_tags: bool,

    /// Omit timestamps from the output
    #[arg(long)]
    pub no_timestamps: bool,

    /// Include export metadata (json format only)
    #[arg(long)]
    pub metadata: bool,

    /// Wrap plain text output at this column (0 = no wrapping)
    #[arg(short, long, default_value_t = 0)]
    pub wrap: usize,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
