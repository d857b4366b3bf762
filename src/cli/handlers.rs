//! Handler for the export invocation.

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::cli::Cli;
use crate::domain::Note;
use crate::export::{render, ExportOptions};
use crate::infra::{read_note, suggested_filename, write_export};

/// Loads the note, renders it, and delivers the output.
pub fn handle_export(cli: &Cli) -> Result<()> {
    let note = load_note(cli)?;
    let options = ExportOptions {
        format: cli.format,
        include_title: !cli.no_title,
        include_tags: !cli.no_tags,
        include_timestamps: !cli.no_timestamps,
        include_metadata: cli.metadata,
        wrap_width: cli.wrap,
    };

    if cli.verbose > 0 {
        eprintln!(
            "rendering '{}' as {}",
            note.title(),
            options.format.display_name()
        );
    }

    let output = render(&note, &options);

    match &cli.output {
        Some(path) => {
            let output_file = resolve_output_path(path, &note, cli)?;
            write_export(&output_file, &output)?;
            println!("Exported '{}' to {}", note.title(), output_file.display());
        }
        None => {
            // Stdout delivery composes with clipboard tools and pipes
            print!("{output}");
        }
    }

    Ok(())
}

/// Builds the Note from the source file plus any CLI overrides.
fn load_note(cli: &Cli) -> Result<Note> {
    let parsed = read_note(&cli.file)
        .with_context(|| format!("cannot load note from {}", cli.file.display()))?;

    // Exporting requires an actual note: no body and no metadata means
    // there is nothing to render
    if parsed.body.trim().is_empty()
        && parsed.title.is_none()
        && parsed.tags.is_empty()
        && parsed.created.is_none()
        && parsed.updated.is_none()
    {
        bail!("note file is empty: {}", cli.file.display());
    }

    let stem = cli
        .file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let title = cli
        .title
        .clone()
        .or(parsed.title)
        .unwrap_or_else(|| stem.clone());
    let tags = if cli.tags.is_empty() {
        parsed.tags
    } else {
        cli.tags.clone()
    };

    Ok(Note::builder(stem, title, parsed.body)
        .tags(tags)
        .created(parsed.created)
        .updated(parsed.updated)
        .build())
}

/// Resolves the output path: directories (existing, trailing `/`, or
/// extension-less) get a filename derived from the note title.
fn resolve_output_path(path: &Path, note: &Note, cli: &Cli) -> Result<std::path::PathBuf> {
    let is_dir = path.is_dir()
        || path.to_string_lossy().ends_with('/')
        || path.extension().is_none();

    if is_dir {
        std::fs::create_dir_all(path)
            .with_context(|| format!("cannot create output directory {}", path.display()))?;
        Ok(path.join(suggested_filename(note.title(), cli.format)))
    } else {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create output directory {}", parent.display()))?;
        }
        Ok(path.to_path_buf())
    }
}
