//! Suggested filenames for exported notes.

use crate::export::ExportFormat;

/// Derives a filename for an export from the note title and format.
///
/// The title is lower-cased and every non-alphanumeric character becomes
/// an underscore; the extension is the format identifier. Titles with no
/// alphanumeric characters at all fall back to `untitled`.
///
/// # Examples
///
/// ```
/// use noteport::export::ExportFormat;
/// use noteport::infra::suggested_filename;
///
/// assert_eq!(suggested_filename("API Design", ExportFormat::Html), "api_design.html");
/// assert_eq!(suggested_filename("", ExportFormat::Markdown), "untitled.md");
/// ```
pub fn suggested_filename(title: &str, format: ExportFormat) -> String {
    let stem: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    let stem = if stem.chars().any(|c| c != '_') {
        stem
    } else {
        "untitled".to_string()
    };

    format!("{}.{}", stem, format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lowercases_and_underscores() {
        assert_eq!(
            suggested_filename("Meeting Notes 2024", ExportFormat::Text),
            "meeting_notes_2024.txt"
        );
        assert_eq!(
            suggested_filename("Hello, World!", ExportFormat::Json),
            "hello__world_.json"
        );
    }

    #[test]
    fn extension_matches_format_id() {
        assert_eq!(suggested_filename("n", ExportFormat::Markdown), "n.md");
        assert_eq!(suggested_filename("n", ExportFormat::Text), "n.txt");
        assert_eq!(suggested_filename("n", ExportFormat::Html), "n.html");
        assert_eq!(suggested_filename("n", ExportFormat::Json), "n.json");
        assert_eq!(suggested_filename("n", ExportFormat::Rtf), "n.rtf");
    }

    #[test]
    fn falls_back_to_untitled() {
        assert_eq!(suggested_filename("", ExportFormat::Markdown), "untitled.md");
        assert_eq!(suggested_filename("!!!", ExportFormat::Markdown), "untitled.md");
    }

    #[test]
    fn non_ascii_becomes_underscores() {
        assert_eq!(suggested_filename("Café", ExportFormat::Text), "caf_.txt");
    }
}
