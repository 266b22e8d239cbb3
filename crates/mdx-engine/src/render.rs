//! Tree serializer: committed blocks to one HTML fragment.

use crate::parsing::{blocks::BlockNode, parse_document};

/// Concatenates each block's html in order, without separators.
pub fn render_html(blocks: &[BlockNode]) -> String {
    let mut out = String::with_capacity(blocks.iter().map(|b| b.html.len()).sum());
    for block in blocks {
        out.push_str(&block.html);
    }
    out
}

/// Parses `text` and serializes the result.
pub fn markdown_to_html(text: &str) -> String {
    render_html(&parse_document(text).blocks)
}
