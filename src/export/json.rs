//! Structured JSON projection of a note.

use chrono::Utc;
use serde::Serialize;

use crate::domain::Note;
use crate::export::ExportOptions;

/// Serialized shape of a JSON export.
///
/// Field order fixes the key order in the output: `title` and `content`
/// always, then the conditional keys. Absent optionals are skipped rather
/// than emitted as null.
#[derive(Debug, Serialize)]
struct JsonExport<'a> {
    title: &'a str,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exported_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    word_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    character_count: Option<usize>,
}

/// Projects a note into a pretty-printed JSON object (2-space indent).
///
/// `tags` appears only when requested and non-empty; `created_at` /
/// `updated_at` only when requested and known (RFC 3339). With
/// `include_metadata` the projection also carries `exported_at` (now),
/// `word_count` (whitespace-delimited tokens of the body), and
/// `character_count` (Unicode scalar values of the body) — the one
/// intentionally time-varying part of the exporter.
pub fn to_json(note: &Note, options: &ExportOptions) -> String {
    let tags = if options.include_tags && !note.tags().is_empty() {
        Some(note.tags())
    } else {
        None
    };

    let (created_at, updated_at) = if options.include_timestamps {
        (
            note.created().map(|t| t.to_rfc3339()),
            note.updated().map(|t| t.to_rfc3339()),
        )
    } else {
        (None, None)
    };

    let (exported_at, word_count, character_count) = if options.include_metadata {
        (
            Some(Utc::now().to_rfc3339()),
            Some(note.content().split_whitespace().count()),
            Some(note.content().chars().count()),
        )
    } else {
        (None, None, None)
    };

    let export = JsonExport {
        title: note.title(),
        content: note.content(),
        tags,
        created_at,
        updated_at,
        exported_at,
        word_count,
        character_count,
    };

    serde_json::to_string_pretty(&export).expect("note projection serializes infallibly")
}
