//! Small HTML builders shared by the block kinds.

/// Wraps `inner` in `<name>…</name>`.
pub fn tag(name: &str, inner: &str) -> String {
    format!("<{name}>{inner}</{name}>")
}

/// Escapes raw code for use as element content.
///
/// Covers `&`, `<`, `>`, `"` and `'`, the apostrophe as `&#39;`.
pub fn escape_code(raw: &str) -> String {
    html_escape::encode_quoted_attribute(raw).replace("&#x27;", "&#39;")
}

/// Escapes a value placed inside a double-quoted attribute.
pub fn escape_attribute(raw: &str) -> String {
    html_escape::encode_double_quoted_attribute(raw).into_owned()
}
