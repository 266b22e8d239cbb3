//! # Inline Transformation
//!
//! Turns the raw text of a paragraph, heading, list item, table cell,
//! blockquote paragraph or definition into inline HTML.
//!
//! ## Architecture
//!
//! Inline rendering is a fixed, ordered table of `(pattern, replacement)`
//! rules (`rules`). Each rule rewrites the whole string and the next rule
//! scans the result, so ordering is part of the output format:
//!
//! 1. footnote references, block math, inline math
//! 2. strong, emphasis, strikethrough
//! 3. code spans, links, images, autolinks
//! 4. typography (`---`, `--`, `...`)
//!
//! ## Known Limitations
//!
//! - Code spans are not raw zones: `` `**x**` `` renders bold inside `<code>`.
//! - Typography runs last and also rewrites attribute text produced earlier.
//!
//! Code blocks never reach this module; the block scanner escapes them.

pub mod rules;

/// Renders `text` by applying every inline rule in order.
pub fn render_inline(text: &str) -> String {
    rules::rules()
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}
