/// Coarse syntactic category of a single character.
///
/// This is only a first filter: the block scanner re-validates the full line
/// before acting on any category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// `#`
    Heading,
    /// `-`, `*` or `+` followed by a space.
    Bullet,
    /// ASCII digit.
    Number,
    /// `` ` ``
    Code,
    /// `>` followed by a space.
    Blockquote,
    /// `[`
    LinkStart,
    /// `!`
    Image,
    /// `_`, or a `*` that is not a bullet.
    Emphasis,
    /// `|`
    TableSeparator,
    /// A bare `-`, the only rule marker not already claimed above.
    RuleCandidate,
    /// Anything else.
    Text,
}

/// Classifies `ch` using one character of lookahead.
///
/// Rules are checked in priority order, so `*` is a bullet when followed by a
/// space and an emphasis marker otherwise.
pub fn classify(ch: char, next: Option<char>) -> CharClass {
    match (ch, next) {
        ('#', _) => CharClass::Heading,
        ('-' | '*' | '+', Some(' ')) => CharClass::Bullet,
        (c, _) if c.is_ascii_digit() => CharClass::Number,
        ('`', _) => CharClass::Code,
        ('>', Some(' ')) => CharClass::Blockquote,
        ('[', _) => CharClass::LinkStart,
        ('!', _) => CharClass::Image,
        ('*' | '_', _) => CharClass::Emphasis,
        ('|', _) => CharClass::TableSeparator,
        ('-', _) => CharClass::RuleCandidate,
        _ => CharClass::Text,
    }
}

/// Classifies the first character of `line`, or `Text` for an empty line.
pub fn classify_line_start(line: &str) -> CharClass {
    let mut chars = line.chars();
    match chars.next() {
        Some(ch) => classify(ch, chars.next()),
        None => CharClass::Text,
    }
}
