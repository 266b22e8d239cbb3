use crate::parsing::{blocks::html::tag, inline::render_inline};

/// Paragraph block type.
///
/// Paragraphs have no delimiters: they are the default when no other block
/// opener matches.
pub struct Paragraph;

impl Paragraph {
    /// Appends `line`, folding the line break before it into a space.
    pub fn push_line(buf: &mut String, line: &str) {
        if !buf.trim().is_empty() {
            buf.push(' ');
        }
        buf.push_str(line);
    }

    pub fn render(raw: &str) -> String {
        tag("p", &render_inline(raw.trim()))
    }
}
