use crate::parsing::blocks::html::{escape_attribute, escape_code};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// A line that looks like a fence, with the text after the delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig<'a> {
    pub kind: FenceKind,
    pub info: &'a str,
}

impl FenceSig<'_> {
    /// The language tag: the info string without extra fence characters.
    pub fn language(&self) -> &str {
        self.info.trim_start_matches(['`', '~']).trim()
    }
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";
    /// Four spaces of indentation make indented code instead.
    pub const MAX_INDENT: usize = 3;

    pub fn sig(line: &str) -> Option<FenceSig<'_>> {
        let body = line.trim_start_matches(' ');
        if line.len() - body.len() > Self::MAX_INDENT {
            return None;
        }
        if let Some(info) = body.strip_prefix(Self::BACKTICKS) {
            Some(FenceSig {
                kind: FenceKind::Backticks,
                info,
            })
        } else {
            body.strip_prefix(Self::TILDES).map(|info| FenceSig {
                kind: FenceKind::Tildes,
                info,
            })
        }
    }

    pub fn closes(kind: FenceKind, sig: Option<FenceSig<'_>>) -> bool {
        matches!(
            (kind, sig),
            (
                FenceKind::Backticks,
                Some(FenceSig {
                    kind: FenceKind::Backticks,
                    ..
                })
            ) | (
                FenceKind::Tildes,
                Some(FenceSig {
                    kind: FenceKind::Tildes,
                    ..
                })
            )
        )
    }

    /// Renders collected fence lines. An empty `language` still yields
    /// `class="language-"`.
    pub fn render(language: &str, lines: &[&str]) -> String {
        format!(
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            escape_attribute(language),
            Self::body(lines)
        )
    }

    /// Joined, newline-trimmed and escaped code content.
    pub fn body(lines: &[&str]) -> String {
        escape_code(lines.join("\n").trim_matches('\n'))
    }
}
