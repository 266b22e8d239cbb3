use std::fmt::Write;

use crate::parsing::blocks::{BlockChildren, BlockNode};

/// One line per block (`token: html`), followed by indented child and
/// language lines.
pub fn normalize(blocks: &[BlockNode]) -> String {
    let mut out = String::new();
    for b in blocks {
        let _ = writeln!(out, "{}: {}", b.kind.token(), b.html);
        if let Some(language) = b.language.as_deref().filter(|l| !l.is_empty()) {
            let _ = writeln!(out, "  language: {language}");
        }
        match &b.children {
            Some(BlockChildren::Items(items)) => {
                for item in items {
                    let _ = writeln!(out, "  - {}", item.value);
                }
            }
            Some(BlockChildren::Definitions(defs)) => {
                for d in defs {
                    let _ = writeln!(out, "  - {} => {}", d.term, d.definition);
                }
            }
            Some(BlockChildren::Rows(rows)) => {
                for row in rows {
                    let _ = writeln!(out, "  - {}", row.join(" | "));
                }
            }
            None => {}
        }
    }
    out
}
