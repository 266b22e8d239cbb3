use crate::parsing::{
    classify::{CharClass, classify_line_start},
    inline::render_inline,
    lines::{is_blank, line_at, next_line_start, previous_line},
};

use super::{
    buffers::{OpenBlocks, Output},
    html::tag,
    kinds::{
        AtxHeading, BlockQuote, BulletItem, CodeFence, DefinitionList, FenceKind, IndentedCode,
        NumberedItem, Paragraph, SetextUnderline, Table, ThematicBreak, list,
    },
    types::{BlockKind, BlockNode, Definition},
};

/// An open code block and the raw lines collected so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenCode<'a> {
    /// `None` for indented code.
    pub fence: Option<FenceKind>,
    pub language: String,
    pub lines: Vec<&'a str>,
}

impl OpenCode<'_> {
    fn into_node(self) -> BlockNode {
        let html = match self.fence {
            Some(_) => CodeFence::render(&self.language, &self.lines),
            None => IndentedCode::render(&self.lines),
        };
        BlockNode::new(BlockKind::CodeBlock, html).with_language(self.language)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScanState<'a> {
    #[default]
    Default,
    InBlockquote,
    InFencedCode(OpenCode<'a>),
    InIndentedCode(OpenCode<'a>),
}

/// Line-level rules tried in `Default` state, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockRule {
    FenceOpen,
    IndentedCode,
    SetextUnderline,
    AtxHeading,
    ThematicBreak,
    BlockquoteOpen,
    Definition,
    Table,
    BulletItem,
    NumberedItem,
    BlankLine,
    ParagraphText,
}

impl BlockRule {
    pub const ORDER: [BlockRule; 12] = [
        BlockRule::FenceOpen,
        BlockRule::IndentedCode,
        BlockRule::SetextUnderline,
        BlockRule::AtxHeading,
        BlockRule::ThematicBreak,
        BlockRule::BlockquoteOpen,
        BlockRule::Definition,
        BlockRule::Table,
        BlockRule::BulletItem,
        BlockRule::NumberedItem,
        BlockRule::BlankLine,
        BlockRule::ParagraphText,
    ];

    /// Applies the rule to the line at the cursor. `false` means no match and
    /// nothing was consumed.
    fn apply<'a>(self, scanner: &mut Scanner<'a>, line: &'a str) -> bool {
        match self {
            BlockRule::FenceOpen => scanner.fence_open(line),
            BlockRule::IndentedCode => scanner.indented_code_open(line),
            BlockRule::SetextUnderline => scanner.setext_underline(line),
            BlockRule::AtxHeading => scanner.atx_heading(line),
            BlockRule::ThematicBreak => scanner.thematic_break(line),
            BlockRule::BlockquoteOpen => scanner.blockquote_open(line),
            BlockRule::Definition => scanner.definition(line),
            BlockRule::Table => scanner.table(),
            BlockRule::BulletItem => scanner.bullet_item(line),
            BlockRule::NumberedItem => scanner.numbered_item(line),
            BlockRule::BlankLine => scanner.blank_line(line),
            BlockRule::ParagraphText => scanner.paragraph_text(line),
        }
    }
}

/// Single left-to-right pass over a document.
///
/// The cursor is always at a line start. Every step either consumes at least
/// one line or moves to a state that will.
pub struct Scanner<'a> {
    doc: &'a str,
    cursor: usize,
    state: ScanState<'a>,
    open: OpenBlocks,
    out: Output,
}

impl<'a> Scanner<'a> {
    pub fn new(doc: &'a str) -> Self {
        Self {
            doc,
            cursor: 0,
            state: ScanState::Default,
            open: OpenBlocks::default(),
            out: Output::default(),
        }
    }

    pub fn run(mut self) -> Vec<BlockNode> {
        while self.cursor < self.doc.len() {
            let line = line_at(self.doc, self.cursor);
            self.step(line);
        }
        self.finish()
    }

    fn step(&mut self, line: &'a str) {
        match std::mem::take(&mut self.state) {
            ScanState::Default => self.dispatch(line),
            ScanState::InBlockquote => self.quote_line(line),
            ScanState::InFencedCode(code) => self.fenced_line(code, line),
            ScanState::InIndentedCode(code) => self.indented_line(code, line),
        }
    }

    fn finish(mut self) -> Vec<BlockNode> {
        match std::mem::take(&mut self.state) {
            ScanState::InFencedCode(code) => {
                log::debug!(
                    "unterminated code fence ({} lines) flushed at end of input",
                    code.lines.len()
                );
                self.out.push(code.into_node());
            }
            ScanState::InIndentedCode(code) => self.out.push(code.into_node()),
            ScanState::Default | ScanState::InBlockquote => {}
        }
        self.open.flush_all(&mut self.out);
        self.out.into_vec()
    }

    fn advance_line(&mut self) {
        self.cursor = next_line_start(self.doc, self.cursor);
    }

    fn dispatch(&mut self, line: &'a str) {
        for rule in BlockRule::ORDER {
            if rule.apply(self, line) {
                return;
            }
        }
    }

    fn quote_line(&mut self, line: &'a str) {
        match BlockQuote::continuation(line) {
            Some(quote_line) => {
                BlockQuote::push(&mut self.open.quote, quote_line);
                self.state = ScanState::InBlockquote;
                self.advance_line();
            }
            None => {
                self.open.flush_quote(&mut self.out);
                self.dispatch(line);
            }
        }
    }

    fn fenced_line(&mut self, mut code: OpenCode<'a>, line: &'a str) {
        self.advance_line();
        let closes = code
            .fence
            .is_some_and(|kind| CodeFence::closes(kind, CodeFence::sig(line)));
        if closes {
            self.out.push(code.into_node());
        } else {
            code.lines.push(line);
            self.state = ScanState::InFencedCode(code);
        }
    }

    fn indented_line(&mut self, mut code: OpenCode<'a>, line: &'a str) {
        if is_blank(line) {
            code.lines.push("");
        } else if let Some(rest) = IndentedCode::strip_indent(line) {
            code.lines.push(rest);
        } else {
            // Not consumed: the line is dispatched again in `Default`.
            self.out.push(code.into_node());
            return;
        }
        self.state = ScanState::InIndentedCode(code);
        self.advance_line();
    }

    fn fence_open(&mut self, line: &'a str) -> bool {
        let Some(sig) = CodeFence::sig(line) else {
            return false;
        };
        self.open.flush_all(&mut self.out);
        self.state = ScanState::InFencedCode(OpenCode {
            fence: Some(sig.kind),
            language: sig.language().to_string(),
            lines: Vec::new(),
        });
        self.advance_line();
        true
    }

    fn indented_code_open(&mut self, line: &'a str) -> bool {
        if !IndentedCode::opens(line) {
            return false;
        }
        self.open.flush_all(&mut self.out);
        // The same line is consumed by `indented_line` on the next step.
        self.state = ScanState::InIndentedCode(OpenCode {
            fence: None,
            language: String::new(),
            lines: Vec::new(),
        });
        true
    }

    fn setext_underline(&mut self, line: &'a str) -> bool {
        let Some(level) = SetextUnderline::level(line) else {
            return false;
        };
        let follows_text =
            previous_line(self.doc, self.cursor).is_some_and(|prev| !is_blank(prev));
        if !follows_text || self.open.paragraph.trim().is_empty() {
            return false;
        }
        self.open.flush_paragraph(&mut self.out);
        if !self.out.promote_paragraph(level) {
            return false;
        }
        self.advance_line();
        true
    }

    fn atx_heading(&mut self, line: &'a str) -> bool {
        if classify_line_start(line) != CharClass::Heading {
            return false;
        }
        let Some((level, text)) = AtxHeading::parse(line) else {
            return false;
        };
        self.open.flush_all(&mut self.out);
        let kind = BlockKind::heading(level);
        self.out
            .push(BlockNode::new(kind, tag(kind.token(), &render_inline(text))));
        self.advance_line();
        true
    }

    fn thematic_break(&mut self, line: &'a str) -> bool {
        if !ThematicBreak::matches(line) {
            return false;
        }
        self.open.flush_all(&mut self.out);
        self.out.push(BlockNode::new(
            BlockKind::HorizontalRule,
            ThematicBreak::HTML.to_string(),
        ));
        self.advance_line();
        true
    }

    fn blockquote_open(&mut self, line: &'a str) -> bool {
        if classify_line_start(line) != CharClass::Blockquote {
            return false;
        }
        let Some(first) = line.strip_prefix(BlockQuote::OPENER) else {
            return false;
        };
        self.open.flush_all(&mut self.out);
        self.open.quote = first.to_string();
        self.state = ScanState::InBlockquote;
        self.advance_line();
        true
    }

    fn definition(&mut self, line: &'a str) -> bool {
        if !DefinitionList::is_term(line) {
            return false;
        }
        let def_start = next_line_start(self.doc, self.cursor);
        if def_start >= self.doc.len() {
            return false;
        }
        let Some(definition) = DefinitionList::definition(line_at(self.doc, def_start)) else {
            return false;
        };
        self.open.flush_all(&mut self.out);
        self.open.definitions.push(Definition {
            term: line.trim().to_string(),
            definition: definition.to_string(),
        });
        self.cursor = next_line_start(self.doc, def_start);
        true
    }

    /// Consumes the whole table, skipping blank and alignment lines, and
    /// commits it immediately.
    fn table(&mut self) -> bool {
        if !Table::is_row(line_at(self.doc, self.cursor)) {
            return false;
        }
        self.open.flush_paragraph(&mut self.out);
        self.open.flush_quote(&mut self.out);
        self.open.flush_lists(&mut self.out);
        self.open.flush_definitions(&mut self.out);

        while self.cursor < self.doc.len() {
            let current = line_at(self.doc, self.cursor);
            if is_blank(current) {
                self.advance_line();
                continue;
            }
            if !Table::is_row(current) {
                break;
            }
            if !Table::is_separator(current) {
                let cells = Table::split_row(current);
                if Table::has_content(&cells) {
                    self.open.table.push(cells);
                }
            }
            self.advance_line();
        }

        self.open.flush_table(&mut self.out);
        true
    }

    fn bullet_item(&mut self, line: &'a str) -> bool {
        let Some(text) = BulletItem::parse(line) else {
            return false;
        };
        self.open.flush_for_list_item(&mut self.out);
        self.open.bullets.push(list::item(text, text));
        self.advance_line();
        true
    }

    fn numbered_item(&mut self, line: &'a str) -> bool {
        let Some((number, text)) = NumberedItem::parse(line) else {
            return false;
        };
        self.open.flush_for_list_item(&mut self.out);
        self.open.numbered.push(list::item(number, text));
        self.advance_line();
        true
    }

    fn blank_line(&mut self, line: &'a str) -> bool {
        if !is_blank(line) {
            return false;
        }
        self.open.flush_all(&mut self.out);
        self.advance_line();
        true
    }

    fn paragraph_text(&mut self, line: &'a str) -> bool {
        Paragraph::push_line(&mut self.open.paragraph, line);
        self.advance_line();
        true
    }
}
