//! M-code Hover
//!
//! Finds the `M<digits>` word under the cursor and renders its
//! documentation as markdown.

use std::sync::LazyLock;

use regex::Regex;

use crate::docs::{DocEntry, DocRegistry};

/// ASCII word boundaries, so accented letters next to the code do not block it
static RE_MCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)M([0-9]{1,4})(?-u:\b)").unwrap());

/// An M-code word found in a line (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MCodeWord {
    pub code: u32,
    pub start: usize,
    pub end: usize,
}

/// Find the M-code word touching byte offset `offset` of `line`
///
/// A cursor directly after the last digit still counts as touching.
pub fn mcode_at(line: &str, offset: usize) -> Option<MCodeWord> {
    RE_MCODE
        .captures_iter(line)
        .find_map(|caps| {
            let word = caps.get(0)?;
            if word.start() > offset || offset > word.end() {
                return None;
            }
            let code = caps.get(1)?.as_str().parse().ok()?;
            Some(MCodeWord {
                code,
                start: word.start(),
                end: word.end(),
            })
        })
}

/// Hover markdown for a code, with a fallback when it is undocumented
pub fn describe(registry: &DocRegistry, code: u32) -> String {
    match registry.lookup(i64::from(code)) {
        Some(entry) => render_entry(entry),
        None => render_missing(code),
    }
}

pub fn render_entry(entry: &DocEntry) -> String {
    let mut md = if entry.title.is_empty() {
        format!("**M{}**\n\n", entry.code)
    } else {
        format!("**{}**\n\n", entry.title)
    };

    if !entry.function.is_empty() {
        md.push_str(&format!("- **Function:** {}\n", entry.function));
    }
    if !entry.purpose.is_empty() {
        md.push_str(&format!("- **Description:** {}\n", entry.purpose));
    }
    if !entry.source.is_empty() {
        md.push_str(&format!("- **Source:** `{}`\n", entry.source));
    }

    md
}

pub fn render_missing(code: u32) -> String {
    format!("**M{}**\n\nNo description available in this macro set.", code)
}
