use crate::parsing::{blocks::kinds::CodeFence, lines::is_blank};

/// Code introduced by four spaces or a tab.
pub struct IndentedCode;

impl IndentedCode {
    pub const SPACES: &'static str = "    ";
    pub const TAB: char = '\t';

    /// Removes one level of indentation, or `None` if the line is not indented.
    pub fn strip_indent(line: &str) -> Option<&str> {
        line.strip_prefix(Self::SPACES)
            .or_else(|| line.strip_prefix(Self::TAB))
    }

    /// Indented and non-blank.
    pub fn opens(line: &str) -> bool {
        !is_blank(line) && Self::strip_indent(line).is_some()
    }

    /// Indented code carries no language class.
    pub fn render(lines: &[&str]) -> String {
        format!("<pre><code>{}</code></pre>", CodeFence::body(lines))
    }
}
