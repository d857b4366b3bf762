//! Rich Text Format conversion.
//!
//! Produces a complete RTF 1.0 document from a constrained markdown
//! subset. Only headings, bold, italic, inline code, and list markers are
//! rewritten; everything else degrades to literal text. The same lossy
//! policy as plain text applies to ordered lists (numbering dropped) and
//! tables (no structure).

use regex::Regex;

use crate::domain::Note;
use crate::export::ExportOptions;

/// Escapes RTF control characters in literal text.
///
/// Backslash must go first so the brace escapes are not double-escaped.
fn escape_rtf(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('{', "\\{")
        .replace('}', "\\}")
}

/// Converts a note to a complete RTF document.
///
/// Document shape: `{\rtf1\ansi\deff0` header, a two-font table (f0
/// Helvetica, f1 Courier New for code runs), a two-entry color table,
/// default font and 24 half-point size, preamble runs per the options,
/// the converted body, and a closing brace.
///
/// Paragraph breaks are emitted once, by the final newline pass; the
/// structural substitutions produce styled runs only, so heading and
/// bullet lines are never double-terminated. A structural run on the
/// last line, which has no newline of its own, still ends with `\par`.
pub fn to_rtf(note: &Note, options: &ExportOptions) -> String {
    let mut doc = String::from(
        "{\\rtf1\\ansi\\deff0\n{\\fonttbl{\\f0\\fswiss Helvetica;}{\\f1\\fmodern Courier New;}}\n{\\colortbl ;\\red0\\green0\\blue0;}\n\\f0\\fs24\n",
    );

    if options.include_title {
        doc.push_str(&format!("{{\\b\\fs36 {}}}\\par\n", escape_rtf(note.title())));
    }
    if options.include_tags && !note.tags().is_empty() {
        doc.push_str(&format!(
            "{{\\i Tags: {}}}\\par\n",
            escape_rtf(&note.tags().join(", "))
        ));
    }
    if options.include_timestamps {
        if let Some(created) = note.created() {
            doc.push_str(&format!(
                "{{\\fs20 Created: {}}}\\par\n",
                created.format("%Y-%m-%d %H:%M")
            ));
        }
        if let Some(updated) = note.updated() {
            doc.push_str(&format!(
                "{{\\fs20 Updated: {}}}\\par\n",
                updated.format("%Y-%m-%d %H:%M")
            ));
        }
    }

    doc.push_str(&convert_body(note.content()));
    doc.push('}');
    doc
}

/// Rewrites the constrained markdown subset into RTF control sequences.
fn convert_body(markdown: &str) -> String {
    let mut text = escape_rtf(markdown);

    // Headings: deeper levels first, decreasing font size
    text = Regex::new(r"(?m)^### (.+)$")
        .unwrap()
        .replace_all(&text, "{\\b\\fs28 ${1}}")
        .into_owned();
    text = Regex::new(r"(?m)^## (.+)$")
        .unwrap()
        .replace_all(&text, "{\\b\\fs32 ${1}}")
        .into_owned();
    text = Regex::new(r"(?m)^# (.+)$")
        .unwrap()
        .replace_all(&text, "{\\b\\fs36 ${1}}")
        .into_owned();

    // Inline runs
    text = Regex::new(r"\*\*(.+?)\*\*")
        .unwrap()
        .replace_all(&text, "{\\b ${1}}")
        .into_owned();
    text = Regex::new(r"\*(.+?)\*")
        .unwrap()
        .replace_all(&text, "{\\i ${1}}")
        .into_owned();
    text = Regex::new(r"`([^`\n]+)`")
        .unwrap()
        .replace_all(&text, "{\\f1 ${1}}")
        .into_owned();

    // List markers: unordered get a bullet glyph, ordered lose numbering
    text = Regex::new(r"(?m)^- (.+)$")
        .unwrap()
        .replace_all(&text, "\\bullet  ${1}")
        .into_owned();
    text = Regex::new(r"(?m)^\d+\. (.+)$")
        .unwrap()
        .replace_all(&text, "${1}")
        .into_owned();

    // Every source line terminates with exactly one \par
    let mut text = text.replace('\n', "\\par\n");

    // Headings and list items always terminate with \par; a structural
    // run on the final line has no trailing newline to supply it
    let last_line = markdown.rsplit('\n').next().unwrap_or("");
    if Regex::new(r"^(#{1,3} |- |\d+\. ).+")
        .unwrap()
        .is_match(last_line)
    {
        text.push_str("\\par");
    }

    text
}
