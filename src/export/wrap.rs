//! Greedy word-wrapping for plain-text export.

/// Wraps text to a fixed column width.
///
/// A width of 0 disables wrapping and returns the text unchanged. Each
/// input line wraps independently; existing line breaks are preserved and
/// never merged. Within a line the break goes at the last space at or
/// before the width column, falling back to a hard break exactly at the
/// width when a single word is longer than the line. Leading whitespace is
/// trimmed from each continuation.
///
/// Column arithmetic counts `char`s, so multi-byte UTF-8 never splits
/// inside a scalar value.
///
/// Idempotent: `wrap(&wrap(text, w), w) == wrap(text, w)` for any width.
///
/// # Examples
///
/// ```
/// use noteport::export::wrap;
///
/// assert_eq!(wrap("alpha beta gamma", 10), "alpha beta\ngamma");
/// assert_eq!(wrap("unchanged", 0), "unchanged");
/// ```
pub fn wrap(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    // split('\n') rather than lines(): a trailing newline must survive
    text.split('\n')
        .map(|line| wrap_line(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, width: usize) -> String {
    let mut rest: Vec<char> = line.chars().collect();
    if rest.len() <= width {
        return line.to_string();
    }

    let mut out: Vec<String> = Vec::new();
    while rest.len() > width {
        // Last space at or before the width column
        let break_at = rest[..=width].iter().rposition(|c| *c == ' ');
        let cut = match break_at {
            Some(i) if i > 0 => i,
            _ => width,
        };

        out.push(rest[..cut].iter().collect::<String>());

        let mut remainder = &rest[cut..];
        while let Some((&' ', tail)) = remainder.split_first() {
            remainder = tail;
        }
        rest = remainder.to_vec();
    }
    out.push(rest.iter().collect());

    out.join("\n")
}
