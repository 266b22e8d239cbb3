use crate::parsing::inline::render_inline;

use super::{
    html::tag,
    kinds::{BlockQuote, DefinitionList, Paragraph, Table, list},
    types::{BlockChildren, BlockKind, BlockNode, Definition, ListItem},
};

/// The ordered sequence of committed blocks.
#[derive(Debug, Default)]
pub struct Output(Vec<BlockNode>);

impl Output {
    pub fn push(&mut self, node: BlockNode) {
        log::trace!("commit {} ({} bytes of html)", node.kind.token(), node.html.len());
        self.0.push(node);
    }

    /// Re-emits the last committed paragraph as a heading of `level`, running
    /// the inline rules again over the recovered text.
    ///
    /// The only rewrite of already committed output. Returns `false`, leaving
    /// the output untouched, when the last block is not a paragraph.
    pub fn promote_paragraph(&mut self, level: u8) -> bool {
        if !matches!(self.0.last(), Some(n) if n.kind == BlockKind::Paragraph) {
            return false;
        }
        let Some(paragraph) = self.0.pop() else {
            return false;
        };
        let inner = paragraph
            .html
            .strip_prefix("<p>")
            .and_then(|s| s.strip_suffix("</p>"))
            .unwrap_or(&paragraph.html);
        let kind = BlockKind::heading(level);
        self.push(BlockNode::new(kind, tag(kind.token(), &render_inline(inner))));
        true
    }

    #[cfg(test)]
    fn last(&self) -> Option<&BlockNode> {
        self.0.last()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<BlockNode> {
        self.0
    }
}

/// Buffers for blocks that span several lines.
///
/// Every flush is a no-op on an empty buffer and leaves the buffer empty.
#[derive(Debug, Default)]
pub struct OpenBlocks {
    pub paragraph: String,
    pub quote: String,
    pub bullets: Vec<ListItem>,
    pub numbered: Vec<ListItem>,
    pub definitions: Vec<Definition>,
    pub table: Vec<Vec<String>>,
}

impl OpenBlocks {
    pub fn flush_paragraph(&mut self, out: &mut Output) {
        if self.paragraph.trim().is_empty() {
            self.paragraph.clear();
            return;
        }
        let raw = std::mem::take(&mut self.paragraph);
        out.push(BlockNode::new(BlockKind::Paragraph, Paragraph::render(&raw)));
    }

    pub fn flush_quote(&mut self, out: &mut Output) {
        if self.quote.trim().is_empty() {
            self.quote.clear();
            return;
        }
        let raw = std::mem::take(&mut self.quote);
        out.push(BlockNode::new(BlockKind::Blockquote, BlockQuote::render(&raw)));
    }

    pub fn flush_bullets(&mut self, out: &mut Output) {
        if self.bullets.is_empty() {
            return;
        }
        let items = std::mem::take(&mut self.bullets);
        out.push(
            BlockNode::new(BlockKind::BulletGroup, list::render("ul", &items))
                .with_children(BlockChildren::Items(items)),
        );
    }

    pub fn flush_numbered(&mut self, out: &mut Output) {
        if self.numbered.is_empty() {
            return;
        }
        let items = std::mem::take(&mut self.numbered);
        out.push(
            BlockNode::new(BlockKind::NumberedGroup, list::render("ol", &items))
                .with_children(BlockChildren::Items(items)),
        );
    }

    pub fn flush_lists(&mut self, out: &mut Output) {
        self.flush_bullets(out);
        self.flush_numbered(out);
    }

    pub fn flush_definitions(&mut self, out: &mut Output) {
        if self.definitions.is_empty() {
            return;
        }
        let defs = std::mem::take(&mut self.definitions);
        out.push(
            BlockNode::new(BlockKind::DefinitionList, DefinitionList::render(&defs))
                .with_children(BlockChildren::Definitions(defs)),
        );
    }

    pub fn flush_table(&mut self, out: &mut Output) {
        if self.table.is_empty() {
            return;
        }
        let rows = std::mem::take(&mut self.table);
        out.push(
            BlockNode::new(BlockKind::Table, Table::render(&rows))
                .with_children(BlockChildren::Rows(rows)),
        );
    }

    pub fn flush_all(&mut self, out: &mut Output) {
        self.flush_paragraph(out);
        self.flush_quote(out);
        self.flush_lists(out);
        self.flush_definitions(out);
        self.flush_table(out);
    }

    /// Flush policy ahead of a list item: everything except lists.
    pub fn flush_for_list_item(&mut self, out: &mut Output) {
        self.flush_paragraph(out);
        self.flush_quote(out);
        self.flush_definitions(out);
        self.flush_table(out);
    }
}
