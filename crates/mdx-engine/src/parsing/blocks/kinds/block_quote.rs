use crate::parsing::{blocks::html::tag, inline::render_inline};

/// What a line contributes to an open blockquote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteLine<'a> {
    /// `> text`
    Text(&'a str),
    /// A bare `>`: paragraph break inside the quote.
    Break,
}

/// Blockquote block type with owned delimiter constants.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';
    /// Prefix required to open or continue a quote.
    pub const OPENER: &'static str = "> ";
    /// Separator between quote paragraphs in the raw buffer.
    pub const PARAGRAPH_BREAK: &'static str = "\n\n";

    /// Classifies a line while a quote is open; `None` ends the quote.
    pub fn continuation(line: &str) -> Option<QuoteLine<'_>> {
        if let Some(text) = line.strip_prefix(Self::OPENER) {
            Some(QuoteLine::Text(text))
        } else if line.trim_end() == ">" {
            Some(QuoteLine::Break)
        } else {
            None
        }
    }

    /// Appends a line to the raw buffer.
    pub fn push(buf: &mut String, line: QuoteLine<'_>) {
        match line {
            QuoteLine::Text(text) => {
                if !buf.is_empty() && !buf.ends_with('\n') {
                    buf.push('\n');
                }
                buf.push_str(text);
            }
            QuoteLine::Break => buf.push_str(Self::PARAGRAPH_BREAK),
        }
    }

    /// One `<p>` per blank-separated paragraph, inner newlines folded.
    pub fn render(raw: &str) -> String {
        let inner: String = raw
            .split(Self::PARAGRAPH_BREAK)
            .map(|p| p.replace('\n', " ").trim().to_string())
            .filter(|p| !p.is_empty())
            .map(|p| tag("p", &render_inline(&p)))
            .collect();
        tag("blockquote", &inner)
    }
}
