//! Line utilities over a whole document.
//!
//! Cursors are byte offsets that always sit on a line start (or at the end of
//! the document), so slicing at them never splits a UTF-8 sequence.

use std::borrow::Cow;

/// Returns the text from `cursor` up to, not including, the next `\n`.
pub fn line_at(doc: &str, cursor: usize) -> &str {
    let rest = &doc[cursor..];
    match rest.find('\n') {
        Some(i) => &rest[..i],
        None => rest,
    }
}

/// Returns the cursor of the line following the one containing `cursor`.
///
/// Clamped to `doc.len()` on the last line.
pub fn next_line_start(doc: &str, cursor: usize) -> usize {
    match doc[cursor..].find('\n') {
        Some(i) => cursor + i + 1,
        None => doc.len(),
    }
}

/// Returns the line immediately before the one containing `cursor`.
///
/// `None` when `cursor` is on the first line.
pub fn previous_line(doc: &str, cursor: usize) -> Option<&str> {
    let line_start = doc[..cursor].rfind('\n').map_or(0, |i| i + 1);
    if line_start == 0 {
        return None;
    }
    let prev_end = line_start - 1;
    let prev_start = doc[..prev_end].rfind('\n').map_or(0, |i| i + 1);
    Some(&doc[prev_start..prev_end])
}

/// True for empty or whitespace-only lines.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Rewrites `\r\n` and lone `\r` line endings to `\n`.
///
/// Borrows when the input already uses `\n` only.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}
