//! Note struct representing a single markdown note handed to the exporter.

use chrono::{DateTime, Utc};
use std::fmt;

/// A note with its markdown body and organizational metadata.
///
/// Notes are supplied by the caller and read-only to the export core;
/// rendering never mutates them.
///
/// # Fields
/// - `id`: opaque identifier (the exporter never interprets it)
/// - `title`: human-readable title; may be empty, in which case rendered
///   output carries an empty title and callers decide any defaulting
/// - `content`: markdown body
/// - `tags`: ordered flat labels, may be empty
/// - `created` / `updated`: optional timestamps
///
/// # Examples
///
/// ```
/// use noteport::domain::Note;
///
/// let note = Note::new("n-1", "API Design", "# Notes\n\nBody here.");
/// assert_eq!(note.title(), "API Design");
/// assert!(note.tags().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    id: String,
    title: String,
    content: String,
    tags: Vec<String>,
    created: Option<DateTime<Utc>>,
    updated: Option<DateTime<Utc>>,
}

impl Note {
    /// Creates a new Note with required fields only.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
            created: None,
            updated: None,
        }
    }

    /// Creates a builder for constructing a Note with optional fields.
    pub fn builder(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> NoteBuilder {
        NoteBuilder::new(id, title, content)
    }

    /// Returns the note's opaque identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's markdown body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the note's tags.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns when the note was created, if known.
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created
    }

    /// Returns when the note was last updated, if known.
    pub fn updated(&self) -> Option<DateTime<Utc>> {
        self.updated
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id)
    }
}

/// Builder for constructing a Note with optional fields.
pub struct NoteBuilder {
    id: String,
    title: String,
    content: String,
    tags: Vec<String>,
    created: Option<DateTime<Utc>>,
    updated: Option<DateTime<Utc>>,
}

impl NoteBuilder {
    fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
            created: None,
            updated: None,
        }
    }

    /// Sets the note's tags.
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Sets the creation timestamp.
    pub fn created(mut self, created: Option<DateTime<Utc>>) -> Self {
        self.created = created;
        self
    }

    /// Sets the last-updated timestamp.
    pub fn updated(mut self, updated: Option<DateTime<Utc>>) -> Self {
        self.updated = updated;
        self
    }

    /// Builds the Note.
    pub fn build(self) -> Note {
        Note {
            id: self.id,
            title: self.title,
            content: self.content,
            tags: self.tags,
            created: self.created,
            updated: self.updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_sets_required_fields() {
        let note = Note::new("abc", "Title", "Body");
        assert_eq!(note.id(), "abc");
        assert_eq!(note.title(), "Title");
        assert_eq!(note.content(), "Body");
        assert!(note.tags().is_empty());
        assert!(note.created().is_none());
        assert!(note.updated().is_none());
    }

    #[test]
    fn empty_title_is_allowed() {
        let note = Note::new("abc", "", "Body");
        assert_eq!(note.title(), "");
    }

    #[test]
    fn builder_sets_optional_fields() {
        let created = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let note = Note::builder("abc", "Title", "Body")
            .tags(vec!["work".to_string(), "draft".to_string()])
            .created(Some(created))
            .build();

        assert_eq!(note.tags(), ["work", "draft"]);
        assert_eq!(note.created(), Some(created));
        assert!(note.updated().is_none());
    }

    #[test]
    fn display_shows_title_and_id() {
        let note = Note::new("abc", "My Note", "Body");
        assert_eq!(note.to_string(), "My Note [abc]");
    }
}
