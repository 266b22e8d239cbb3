use std::sync::OnceLock;

use regex::{Captures, Regex};

/// How a rule rewrites its matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    /// A `regex` replacement template (`${1}` refers to capture groups).
    Template(&'static str),
    /// `[text](url)` to an anchor, unless the match is preceded by `!`.
    ///
    /// Image syntax is left untouched for the later image rule.
    Link,
}

/// A compiled inline rule.
#[derive(Debug)]
pub struct InlineRule {
    pub name: &'static str,
    pub pattern: Regex,
    pub replacement: Replacement,
}

impl InlineRule {
    /// Rewrites every non-overlapping match in `text`.
    pub fn apply(&self, text: &str) -> String {
        match self.replacement {
            Replacement::Template(template) => {
                self.pattern.replace_all(text, template).into_owned()
            }
            Replacement::Link => self
                .pattern
                .replace_all(text, |caps: &Captures<'_>| {
                    let whole = &caps[0];
                    let start = caps.get(0).map_or(0, |m| m.start());
                    if text[..start].ends_with('!') {
                        whole.to_string()
                    } else {
                        format!(r#"<a href="{}">{}</a>"#, &caps[2], &caps[1])
                    }
                })
                .into_owned(),
        }
    }
}

/// Rule table in application order. Later rules see earlier rules' output.
const RULE_SOURCES: &[(&str, &str, Replacement)] = &[
    (
        "footnote",
        r"\[\^([^\]]+)\]",
        Replacement::Template(r##"<sup><a href="#fn${1}">${1}</a></sup>"##),
    ),
    (
        "math-display",
        r"\$\$([^$]+)\$\$",
        Replacement::Template(r#"<div class="math-display">${1}</div>"#),
    ),
    (
        "math-inline",
        r"\$([^$]+)\$",
        Replacement::Template(r#"<span class="math-inline">${1}</span>"#),
    ),
    (
        "strong",
        r"\*\*(.*?)\*\*",
        Replacement::Template("<strong>${1}</strong>"),
    ),
    (
        "strong-underscore",
        r"__(.*?)__",
        Replacement::Template("<strong>${1}</strong>"),
    ),
    ("em", r"\*(.*?)\*", Replacement::Template("<em>${1}</em>")),
    (
        "em-underscore",
        r"_(.*?)_",
        Replacement::Template("<em>${1}</em>"),
    ),
    (
        "strikethrough",
        r"~~(.*?)~~",
        Replacement::Template("<del>${1}</del>"),
    ),
    (
        "code",
        r"`([^`]+)`",
        Replacement::Template("<code>${1}</code>"),
    ),
    ("link", r"\[([^\]]+)\]\(([^)]+)\)", Replacement::Link),
    (
        "image",
        r"!\[([^\]]*)\]\(([^)]+)\)",
        Replacement::Template(r#"<img src="${2}" alt="${1}" />"#),
    ),
    (
        "autolink",
        r"<(https?://[^>]+)>",
        Replacement::Template(r#"<a href="${1}">${1}</a>"#),
    ),
    ("em-dash", r"---", Replacement::Template("&mdash;")),
    ("en-dash", r"--", Replacement::Template("&ndash;")),
    ("ellipsis", r"\.\.\.", Replacement::Template("&hellip;")),
];

/// The compiled rule table, built once per process.
pub fn rules() -> &'static [InlineRule] {
    static RULES: OnceLock<Vec<InlineRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        RULE_SOURCES
            .iter()
            .map(|&(name, source, replacement)| InlineRule {
                name,
                pattern: Regex::new(source).expect("Invalid inline rule regex"),
                replacement,
            })
            .collect()
    })
}

/// Rule names in application order.
#[cfg(test)]
fn rule_names() -> impl Iterator<Item = &'static str> {
    RULE_SOURCES.iter().map(|&(name, _, _)| name)
}
