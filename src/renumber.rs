//! Line Renumbering
//!
//! Rewrites the leading block number of every line to the line's
//! zero-based index. Lines without a leading number gain one.

use std::sync::LazyLock;

use regex::Regex;

/// Optional indentation, a decimal run, then at least one whitespace
static RE_LABEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*[0-9]+\s+").unwrap());

/// Remove a leading block number from a single line
///
/// Digits elsewhere in the line are left alone, and so is a number that
/// is not followed by whitespace.
pub fn strip_label(line: &str) -> &str {
    match RE_LABEL.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Renumber a whole document
///
/// Accepts `\n` and `\r\n` line endings and always joins with `\n`. A `\r`
/// not followed by `\n` is content. Empty input stays empty.
pub fn renumber_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let last = text.matches('\n').count();
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for (idx, line) in text.split('\n').enumerate() {
        let line = if idx < last {
            line.strip_suffix('\r').unwrap_or(line)
        } else {
            line
        };
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{} {}", idx, strip_label(line)));
    }
    out
}
