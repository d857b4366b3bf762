//! YAML frontmatter parsing for note source files.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

/// Metadata and body extracted from a note source file.
///
/// Every metadata field is optional: a file without frontmatter parses to
/// a `ParsedNote` whose body is the whole file.
#[derive(Debug, Clone, Default)]
pub struct ParsedNote {
    pub title: Option<String>,
    pub tags: Vec<String>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub body: String,
}

/// Errors during frontmatter parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing closing frontmatter delimiter '---'")]
    MissingClosingDelimiter,

    #[error("invalid YAML in frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

/// The recognized frontmatter fields. Unrecognized fields are ignored so
/// notes from other tools still load.
#[derive(Debug, Default, Deserialize)]
struct Frontmatter {
    title: Option<String>,
    tags: Option<Vec<String>>,
    created: Option<DateTime<Utc>>,
    updated: Option<DateTime<Utc>>,
}

/// Parses markdown content with optional YAML frontmatter.
///
/// # Format
/// ```text
/// ---
/// title: Note Title
/// tags: [work, draft]
/// created: 2024-01-15T10:30:00Z
/// updated: 2024-01-16T14:00:00Z
/// ---
/// Body content here...
/// ```
///
/// Content that does not open with a `---` line is treated as a bare body
/// with no metadata.
///
/// # Errors
///
/// Returns `ParseError` if an opening `---` has no closing delimiter, or
/// the YAML between the delimiters is invalid.
pub fn parse(content: &str) -> Result<ParsedNote, ParseError> {
    let after_opening = if let Some(rest) = content.strip_prefix("---\r\n") {
        rest
    } else if let Some(rest) = content.strip_prefix("---\n") {
        rest
    } else {
        return Ok(ParsedNote {
            body: content.to_string(),
            ..ParsedNote::default()
        });
    };

    let (yaml, body) = split_at_closing_delimiter(after_opening)?;

    let frontmatter: Frontmatter = if yaml.trim().is_empty() {
        Frontmatter::default()
    } else {
        serde_yaml::from_str(yaml)?
    };

    Ok(ParsedNote {
        title: frontmatter.title,
        tags: frontmatter.tags.unwrap_or_default(),
        created: frontmatter.created,
        updated: frontmatter.updated,
        body: body.to_string(),
    })
}

/// Splits frontmatter content at the first line that is exactly `---`.
fn split_at_closing_delimiter(content: &str) -> Result<(&str, &str), ParseError> {
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let yaml = &content[..offset];
            let body = &content[offset + line.len()..];
            return Ok((yaml, body));
        }
        offset += line.len();
    }
    Err(ParseError::MissingClosingDelimiter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_full_frontmatter() {
        let content = "---\ntitle: My Note\ntags: [work, draft]\ncreated: 2024-01-15T10:30:00Z\nupdated: 2024-01-16T14:00:00Z\n---\nBody here.\n";
        let parsed = parse(content).unwrap();

        assert_eq!(parsed.title.as_deref(), Some("My Note"));
        assert_eq!(parsed.tags, ["work", "draft"]);
        assert_eq!(
            parsed.created.unwrap().to_rfc3339(),
            "2024-01-15T10:30:00+00:00"
        );
        assert_eq!(
            parsed.updated.unwrap().to_rfc3339(),
            "2024-01-16T14:00:00+00:00"
        );
        assert_eq!(parsed.body, "Body here.\n");
    }

    #[test]
    fn content_without_frontmatter_is_bare_body() {
        let parsed = parse("# Just Markdown\n\nNo metadata.").unwrap();
        assert!(parsed.title.is_none());
        assert!(parsed.tags.is_empty());
        assert_eq!(parsed.body, "# Just Markdown\n\nNo metadata.");
    }

    #[test]
    fn partial_frontmatter_leaves_rest_unset() {
        let parsed = parse("---\ntitle: Only Title\n---\nBody").unwrap();
        assert_eq!(parsed.title.as_deref(), Some("Only Title"));
        assert!(parsed.tags.is_empty());
        assert!(parsed.created.is_none());
        assert_eq!(parsed.body, "Body");
    }

    #[test]
    fn empty_frontmatter_block_is_fine() {
        let parsed = parse("---\n---\nBody").unwrap();
        assert!(parsed.title.is_none());
        assert_eq!(parsed.body, "Body");
    }

    #[test]
    fn crlf_delimiters_are_accepted() {
        let parsed = parse("---\r\ntitle: CRLF\r\n---\r\nBody").unwrap();
        assert_eq!(parsed.title.as_deref(), Some("CRLF"));
        assert_eq!(parsed.body, "Body");
    }

    #[test]
    fn missing_closing_delimiter_errors() {
        let err = parse("---\ntitle: Unterminated\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingClosingDelimiter));
    }

    #[test]
    fn invalid_yaml_errors() {
        let err = parse("---\ntitle: [unclosed\n---\nBody").unwrap_err();
        assert!(matches!(err, ParseError::InvalidYaml(_)));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let parsed = parse("---\ntitle: T\nauthor: nobody\n---\nBody").unwrap();
        assert_eq!(parsed.title.as_deref(), Some("T"));
    }

    #[test]
    fn empty_input_is_empty_body() {
        let parsed = parse("").unwrap();
        assert_eq!(parsed.body, "");
    }
}
