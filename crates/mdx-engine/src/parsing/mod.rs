pub mod blocks;
pub mod classify;
pub mod inline;
pub mod lines;
pub mod snapshot;

#[cfg(test)]
mod tests;

use blocks::{BlockNode, Scanner};
use lines::normalize_newlines;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

/// Parses a whole document into committed blocks. Never fails.
pub fn parse_document(text: &str) -> ParsedDoc {
    let doc = normalize_newlines(text);
    let blocks = Scanner::new(&doc).run();
    log::debug!("parsed {} blocks from {} bytes", blocks.len(), text.len());
    ParsedDoc { blocks }
}
