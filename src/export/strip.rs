//! Markdown syntax removal for plain-text export.

use regex::Regex;

/// Strips markdown syntax from text, leaving readable plain text.
///
/// Total over any input: malformed or unterminated markdown (a stray `*`,
/// an unclosed code fence) is left as literal characters rather than
/// raising an error.
///
/// The substitutions are ordered; later rules operate on already-stripped
/// text. Bold resolves before italic so `**` markers are not mis-read as
/// nested italics, and images resolve before links so the link rule does
/// not leave a stray `!` behind.
///
/// Known, accepted information loss:
/// - ordered-list numbering is dropped entirely
/// - table pipes become single spaces; column structure is not preserved
///
/// # Examples
///
/// ```
/// use noteport::export::strip;
///
/// assert_eq!(strip("# Heading\n\nSome **bold** text."), "Heading\n\nSome bold text.");
/// assert_eq!(strip("[docs](https://example.com)"), "docs");
/// ```
pub fn strip(markdown: &str) -> String {
    let mut text = markdown.to_string();

    // Heading markers at line start
    text = Regex::new(r"(?m)^#{1,6}[ \t]+")
        .unwrap()
        .replace_all(&text, "")
        .into_owned();

    // Bold before italic: both use the same character
    text = Regex::new(r"\*\*(.+?)\*\*")
        .unwrap()
        .replace_all(&text, "$1")
        .into_owned();
    text = Regex::new(r"__(.+?)__")
        .unwrap()
        .replace_all(&text, "$1")
        .into_owned();
    text = Regex::new(r"\*(.+?)\*")
        .unwrap()
        .replace_all(&text, "$1")
        .into_owned();
    text = Regex::new(r"_(.+?)_")
        .unwrap()
        .replace_all(&text, "$1")
        .into_owned();

    // Strikethrough
    text = Regex::new(r"~~(.+?)~~")
        .unwrap()
        .replace_all(&text, "$1")
        .into_owned();

    // Code spans: fenced blocks (optional language tag dropped), then inline
    text = Regex::new(r"```(?:[A-Za-z0-9]*\n)?([^`]*)```")
        .unwrap()
        .replace_all(&text, "$1")
        .into_owned();
    text = Regex::new(r"`([^`\n]+)`")
        .unwrap()
        .replace_all(&text, "$1")
        .into_owned();

    // Images before links
    text = Regex::new(r"!\[([^\]]*)\]\([^)]*\)")
        .unwrap()
        .replace_all(&text, "$1")
        .into_owned();
    text = Regex::new(r"\[([^\]]*)\]\([^)]*\)")
        .unwrap()
        .replace_all(&text, "$1")
        .into_owned();

    // Unordered list markers become literal bullets
    text = Regex::new(r"(?m)^[-*+][ \t]+")
        .unwrap()
        .replace_all(&text, "\u{2022} ")
        .into_owned();

    // Ordered list markers are dropped (numbering not preserved)
    text = Regex::new(r"(?m)^\d+\.[ \t]+")
        .unwrap()
        .replace_all(&text, "")
        .into_owned();

    // Blockquote markers
    text = Regex::new(r"(?m)^> ?")
        .unwrap()
        .replace_all(&text, "")
        .into_owned();

    // Horizontal rules normalize to a plain ---
    text = Regex::new(r"(?m)^-{3,}[ \t]*$")
        .unwrap()
        .replace_all(&text, "---")
        .into_owned();

    // Table pipes become spaces; alignment is not reconstructed
    text.replace('|', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_heading_markers() {
        assert_eq!(strip("# One"), "One");
        assert_eq!(strip("### Three"), "Three");
        assert_eq!(strip("###### Six"), "Six");
    }

    #[test]
    fn strips_bold_and_italic() {
        assert_eq!(strip("**bold**"), "bold");
        assert_eq!(strip("__bold__"), "bold");
        assert_eq!(strip("*italic*"), "italic");
        assert_eq!(strip("_italic_"), "italic");
    }

    #[test]
    fn bold_resolves_before_italic() {
        assert_eq!(strip("some **bold** and *italic* text"), "some bold and italic text");
    }

    #[test]
    fn strips_strikethrough() {
        assert_eq!(strip("~~gone~~"), "gone");
    }

    #[test]
    fn strips_inline_code() {
        assert_eq!(strip("use `println!` here"), "use println! here");
    }

    #[test]
    fn strips_fenced_code_preserving_body() {
        assert_eq!(strip("```rust\nfn main() {}\n```"), "fn main() {}\n");
        assert_eq!(strip("```\nplain\n```"), "plain\n");
    }

    #[test]
    fn resolves_links_to_text() {
        assert_eq!(strip("[docs](https://example.com)"), "docs");
    }

    #[test]
    fn resolves_images_to_alt_text() {
        assert_eq!(strip("![a diagram](img.png)"), "a diagram");
    }

    #[test]
    fn converts_unordered_list_markers_to_bullets() {
        assert_eq!(strip("- one\n* two\n+ three"), "\u{2022} one\n\u{2022} two\n\u{2022} three");
    }

    #[test]
    fn drops_ordered_list_numbering() {
        assert_eq!(strip("1. first\n2. second"), "first\nsecond");
    }

    #[test]
    fn removes_blockquote_markers() {
        assert_eq!(strip("> quoted line"), "quoted line");
    }

    #[test]
    fn normalizes_horizontal_rules() {
        assert_eq!(strip("-----"), "---");
        assert_eq!(strip("a\n----------\nb"), "a\n---\nb");
    }

    #[test]
    fn replaces_table_pipes_with_spaces() {
        let stripped = strip("| A | B |\n|---|---|\n| 1 | 2 |");
        assert!(!stripped.contains('|'));
        assert!(stripped.contains(" A "));
        // No alignment reconstruction; loss is deliberate
        assert!(!stripped.contains("+--"));
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert_eq!(strip(""), "");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(strip("just some words"), "just some words");
    }

    #[test]
    fn stray_marker_is_left_literal() {
        assert_eq!(strip("a lone * star"), "a lone * star");
        assert_eq!(strip("broken **bold"), "broken **bold");
    }

    #[test]
    fn never_introduces_markdown_syntax() {
        let stripped = strip("# H\n\n**b** *i* `c` ~~s~~\n\n- item");
        assert!(!stripped.contains('#'));
        assert!(!stripped.contains('*'));
        assert!(!stripped.contains('`'));
        assert!(!stripped.contains("~~"));
    }

    #[test]
    fn spec_heading_and_bold_scenario() {
        assert_eq!(
            strip("# Heading\n\nSome **bold** text."),
            "Heading\n\nSome bold text."
        );
    }
}
