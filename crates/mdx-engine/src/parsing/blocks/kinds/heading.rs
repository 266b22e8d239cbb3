/// `#`-prefixed heading.
pub struct AtxHeading;

impl AtxHeading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Parses `line` into `(level, text)`.
    ///
    /// The space after the markers is optional. Trailing `#` runs are
    /// stripped together with the whitespace around them.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let rest = line.trim_start_matches(Self::MARKER);
        let level = line.len() - rest.len();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let rest = rest.strip_prefix(' ').unwrap_or(rest);
        Some((level as u8, Self::strip_closing(rest).trim()))
    }

    fn strip_closing(text: &str) -> &str {
        let trimmed = text.trim_end();
        if trimmed.ends_with(Self::MARKER) {
            trimmed.trim_end_matches(Self::MARKER).trim_end()
        } else {
            text
        }
    }
}

/// A `===` or `---` line promoting the paragraph above it.
pub struct SetextUnderline;

impl SetextUnderline {
    /// `Some(1)` for `=` runs, `Some(2)` for `-` runs.
    pub fn level(line: &str) -> Option<u8> {
        let trimmed = line.trim();
        let first = trimmed.chars().next()?;
        let level = match first {
            '=' => 1,
            '-' => 2,
            _ => return None,
        };
        trimmed.chars().all(|c| c == first).then_some(level)
    }
}
