pub mod io;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use io::*;
pub use parsing::{
    ParsedDoc,
    blocks::{BlockChildren, BlockKind, BlockNode, Definition, ListItem},
    classify::{CharClass, classify},
    inline::render_inline,
    parse_document,
};
pub use render::{markdown_to_html, render_html};
