//! Line-level parsing and rendering of the variable file format.
//!
//! Format:
//! - Lines end with `\n`, `\r\n`, or a lone `\r`.
//! - One `KEY=VALUE` declaration per line, split on the first `=`.
//! - Blank lines and lines starting with `#` (after trimming) are ignored.
//! - Lines without `=` or with an empty key are malformed and skipped.
//! - A value wrapped in matching `"` or `'` has the two quote characters removed.
//!   No escape sequences are processed.

/// Classification of a single line of a variable file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    Blank,
    Comment,
    Malformed,
    Entry { key: &'a str, value: &'a str },
}

/// Split file content into lines, accepting `\n`, `\r\n`, and lone `\r` endings.
pub(crate) fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

/// Classify one raw line. The returned value is trimmed and unquoted but not
/// yet interpolated.
pub(crate) fn parse_line(raw: &str) -> Line<'_> {
    let line = raw.trim();
    if line.is_empty() {
        return Line::Blank;
    }
    if line.starts_with('#') {
        return Line::Comment;
    }

    let Some((key, value)) = line.split_once('=') else {
        return Line::Malformed;
    };

    let key = key.trim();
    if key.is_empty() {
        return Line::Malformed;
    }

    Line::Entry {
        key,
        value: unquote(value.trim()),
    }
}

/// Strip one pair of matching surrounding quotes.
///
/// A lone quote character counts as both the opening and closing quote and
/// yields an empty string.
pub(crate) fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.starts_with(quote) && value.ends_with(quote) {
            return value.get(1..value.len() - 1).unwrap_or("");
        }
    }
    value
}

/// Render one entry as a file line (without the newline).
///
/// Values containing a space or `=` are wrapped in double quotes. Quote
/// characters inside the value are written as-is.
pub(crate) fn render_entry(key: &str, value: &str) -> String {
    if value.contains([' ', '=']) {
        format!("{key}=\"{value}\"")
    } else {
        format!("{key}={value}")
    }
}
