use crate::parsing::{
    blocks::{html::tag, types::ListItem},
    classify::{CharClass, classify_line_start},
    inline::render_inline,
};

/// `- item`, `* item` or `+ item`.
pub struct BulletItem;

impl BulletItem {
    /// Marker plus the mandatory space.
    pub const MARKER_LEN: usize = 2;

    /// Returns the trimmed item text.
    pub fn parse(line: &str) -> Option<&str> {
        if classify_line_start(line) != CharClass::Bullet {
            return None;
        }
        Some(line[Self::MARKER_LEN..].trim())
    }
}

/// `1. item`
pub struct NumberedItem;

impl NumberedItem {
    pub const DELIMITER: &'static str = ". ";

    /// Returns `(number, trimmed text)`.
    pub fn parse(line: &str) -> Option<(&str, &str)> {
        if classify_line_start(line) != CharClass::Number {
            return None;
        }
        let digits_end = line
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(line.len());
        let text = line[digits_end..].strip_prefix(Self::DELIMITER)?;
        Some((&line[..digits_end], text.trim()))
    }
}

/// Builds a list entry with `text` rendered inline.
pub fn item(value: &str, text: &str) -> ListItem {
    ListItem {
        value: value.to_string(),
        tag: tag("li", &render_inline(text)),
    }
}

/// Wraps accumulated items in `<ul>` or `<ol>`.
pub fn render(wrapper: &str, items: &[ListItem]) -> String {
    let inner: String = items.iter().map(|i| i.tag.as_str()).collect();
    tag(wrapper, &inner)
}
