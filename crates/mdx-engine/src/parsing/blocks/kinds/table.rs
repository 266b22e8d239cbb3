use crate::parsing::{blocks::html::tag, inline::render_inline};

/// Pipe tables.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    pub fn is_row(line: &str) -> bool {
        line.contains(Self::PIPE)
    }

    /// Alignment rows such as `| --- | :-: |`: only pipes, dashes, colons and
    /// whitespace.
    pub fn is_separator(line: &str) -> bool {
        !line.trim().is_empty()
            && line
                .chars()
                .all(|c| c == Self::PIPE || c == '-' || c == ':' || c.is_whitespace())
    }

    /// Splits a row into trimmed cells, ignoring one outer pipe on each side.
    pub fn split_row(line: &str) -> Vec<String> {
        let trimmed = line.trim();
        let inner = trimmed.strip_prefix(Self::PIPE).unwrap_or(trimmed);
        let inner = inner.strip_suffix(Self::PIPE).unwrap_or(inner);
        inner
            .split(Self::PIPE)
            .map(|cell| cell.trim().to_string())
            .collect()
    }

    pub fn has_content(cells: &[String]) -> bool {
        cells.iter().any(|c| !c.is_empty())
    }

    /// First row becomes the header when there is more than one row.
    pub fn render(rows: &[Vec<String>]) -> String {
        let mut html = String::from("<table>");
        match rows {
            [header, body @ ..] if !body.is_empty() => {
                html.push_str(&tag("thead", &Self::row("th", header)));
                html.push_str(&Self::body(body));
            }
            _ => html.push_str(&Self::body(rows)),
        }
        html.push_str("</table>");
        html
    }

    fn body(rows: &[Vec<String>]) -> String {
        let inner: String = rows.iter().map(|r| Self::row("td", r)).collect();
        tag("tbody", &inner)
    }

    fn row(cell_tag: &str, cells: &[String]) -> String {
        let inner: String = cells
            .iter()
            .map(|c| tag(cell_tag, &render_inline(c)))
            .collect();
        tag("tr", &inner)
    }
}
