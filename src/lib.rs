//! noteport - export markdown notes to md, txt, html, json, or rtf

pub mod cli;
pub mod domain;
pub mod export;
pub mod infra;

use anyhow::Result;
use clap::Parser;

use cli::{handlers::handle_export, Cli};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    handle_export(&cli)
}
