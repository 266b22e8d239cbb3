use serde::{Serialize, Serializer};

/// The kind of a committed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// ATX or setext heading, `level` in `1..=6`.
    Heading { level: u8 },
    Paragraph,
    Blockquote,
    BulletGroup,
    NumberedGroup,
    DefinitionList,
    Table,
    /// Fenced or indented code.
    CodeBlock,
    HorizontalRule,
}

const HEADING_TOKENS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

impl BlockKind {
    /// Builds a heading kind, clamping `level` into `1..=6`.
    pub fn heading(level: u8) -> Self {
        BlockKind::Heading {
            level: level.clamp(1, 6),
        }
    }

    /// Stable token name used in JSON output and snapshots.
    pub fn token(self) -> &'static str {
        match self {
            BlockKind::Heading { level } => HEADING_TOKENS[usize::from(level.clamp(1, 6) - 1)],
            BlockKind::Paragraph => "paragraph",
            BlockKind::Blockquote => "blockquote",
            BlockKind::BulletGroup => "bullet-group",
            BlockKind::NumberedGroup => "numbered-group",
            BlockKind::DefinitionList => "definition-list",
            BlockKind::Table => "table",
            BlockKind::CodeBlock => "code-block",
            BlockKind::HorizontalRule => "hr",
        }
    }
}

impl Serialize for BlockKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

/// One list entry: the raw text (or number, for ordered lists) and its `<li>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub value: String,
    pub tag: String,
}

/// One `term` / `: definition` pair, both raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definition {
    pub term: String,
    pub definition: String,
}

/// Raw sub-items retained on group blocks for introspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BlockChildren {
    Items(Vec<ListItem>),
    Definitions(Vec<Definition>),
    Rows(Vec<Vec<String>>),
}

impl BlockChildren {
    pub fn len(&self) -> usize {
        match self {
            BlockChildren::Items(items) => items.len(),
            BlockChildren::Definitions(defs) => defs.len(),
            BlockChildren::Rows(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A committed block with its rendered HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockNode {
    #[serde(rename = "token")]
    pub kind: BlockKind,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<BlockChildren>,
    /// Fence language tag; empty for indented code, `None` for non-code blocks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl BlockNode {
    pub fn new(kind: BlockKind, html: String) -> Self {
        Self {
            kind,
            html,
            children: None,
            language: None,
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: BlockChildren) -> Self {
        self.children = Some(children);
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}
