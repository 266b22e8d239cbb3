use crate::parsing::{
    blocks::{html::tag, types::Definition},
    inline::render_inline,
};

/// A term line followed by a `: definition` line.
pub struct DefinitionList;

impl DefinitionList {
    pub const MARKER: &'static str = ": ";

    /// A candidate term: starts with a non-whitespace character and has no `:`.
    pub fn is_term(line: &str) -> bool {
        line.chars().next().is_some_and(|c| !c.is_whitespace()) && !line.contains(':')
    }

    /// The definition text, if `line` starts (after trimming) with `: `.
    pub fn definition(line: &str) -> Option<&str> {
        line.trim().strip_prefix(Self::MARKER).map(str::trim)
    }

    pub fn render(defs: &[Definition]) -> String {
        let inner: String = defs
            .iter()
            .map(|d| {
                format!(
                    "{}{}",
                    tag("dt", &render_inline(&d.term)),
                    tag("dd", &render_inline(&d.definition))
                )
            })
            .collect();
        tag("dl", &inner)
    }
}
