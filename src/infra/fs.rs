//! File system operations for reading note sources and writing exports.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::infra::frontmatter::{self, ParseError, ParsedNote};

/// Errors from file system operations.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse { path: PathBuf, source: ParseError },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to atomically replace {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        source: tempfile::PersistError,
    },
}

/// Reads a note source file and parses its optional frontmatter.
pub fn read_note(path: &Path) -> Result<ParsedNote, FsError> {
    let content = std::fs::read_to_string(path).map_err(|source| FsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    frontmatter::parse(&content).map_err(|source| FsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes export output to a file atomically.
///
/// The contents go to a temporary file in the destination directory, which
/// is then persisted over the target path, so a crash mid-write never
/// leaves a truncated export behind.
pub fn write_export(path: &Path, contents: &str) -> Result<(), FsError> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());

    let mut temp = match parent {
        Some(dir) => NamedTempFile::new_in(dir),
        None => NamedTempFile::new_in("."),
    }
    .map_err(|source| FsError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    temp.write_all(contents.as_bytes())
        .map_err(|source| FsError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    temp.persist(path).map_err(|source| FsError::AtomicWrite {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
