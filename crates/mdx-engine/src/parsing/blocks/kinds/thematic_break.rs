/// `---`, `***` or `___` on a line of its own.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [char; 3] = ['-', '*', '_'];
    pub const MIN_RUN: usize = 3;
    pub const HTML: &'static str = "<hr />";

    pub fn matches(line: &str) -> bool {
        let trimmed = line.trim();
        trimmed.len() >= Self::MIN_RUN
            && Self::MARKERS
                .iter()
                .any(|&m| trimmed.chars().all(|c| c == m))
    }
}
