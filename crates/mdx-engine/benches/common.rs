// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** _content_ and a [link](https://example.com).\n\n- Bullet point\n- Another item\n\n1. First\n2. Second\n\n> Quoted text\n> across lines\n\nTerm\n: Definition\n\n| a | b |\n| - | - |\n| 1 | 2 |\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_long_paragraphs(paragraphs: usize, lines: usize) -> String {
    let mut content = String::new();
    for p in 0..paragraphs {
        for l in 0..lines {
            content.push_str(&format!(
                "Line {l} of paragraph {p} with `code`, *emphasis* and dashes -- here...\n"
            ));
        }
        content.push('\n');
    }
    content
}
