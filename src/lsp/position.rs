//! Position Math
//!
//! LSP columns count UTF-16 code units; Rust strings index by byte.

use tower_lsp::lsp_types::{Position, Range};

/// Byte offset of a UTF-16 column, clamped to the line length
pub fn utf16_to_byte(line: &str, character: u32) -> usize {
    let mut units = 0u32;
    for (idx, ch) in line.char_indices() {
        if units >= character {
            return idx;
        }
        units += ch.len_utf16() as u32;
    }
    line.len()
}

/// UTF-16 column of a byte offset
pub fn byte_to_utf16(line: &str, offset: usize) -> u32 {
    line[..offset.min(line.len())]
        .chars()
        .map(|ch| ch.len_utf16() as u32)
        .sum()
}

/// Split into lines the way LSP clients count them: `\r\n`, `\n` or a lone `\r`
pub fn lsp_lines(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&content[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&content[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    lines.push(&content[start..]);
    lines
}

/// Range covering the whole document
pub fn full_range(content: &str) -> Range {
    let lines = lsp_lines(content);
    let last = lines.last().copied().unwrap_or("");
    Range::new(
        Position::new(0, 0),
        Position::new((lines.len() - 1) as u32, byte_to_utf16(last, last.len())),
    )
}
