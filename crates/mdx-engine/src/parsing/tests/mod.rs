//! Behaviour tests for the block scanner driven through `parse_document`.

use pretty_assertions::assert_eq;

use crate::parsing::{
    blocks::{BlockChildren, BlockKind, BlockNode},
    parse_document, snapshot,
};

fn blocks(md: &str) -> Vec<BlockNode> {
    let doc = parse_document(md);
    snapshot::invariants(&doc.blocks);
    doc.blocks
}

fn html(md: &str) -> Vec<String> {
    blocks(md).into_iter().map(|b| b.html).collect()
}

#[test]
fn empty_document() {
    assert!(blocks("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(blocks("\n\n  \n").is_empty());
}

#[test]
fn plain_paragraph_is_wrapped_once() {
    assert_eq!(html("just some plain words"), vec!["<p>just some plain words</p>"]);
}

#[test]
fn paragraph_lines_fold_into_spaces() {
    assert_eq!(html("one\ntwo\nthree\n"), vec!["<p>one two three</p>"]);
}

#[test]
fn blank_line_separates_paragraphs() {
    assert_eq!(html("one\n\ntwo"), vec!["<p>one</p>", "<p>two</p>"]);
}

#[test]
fn crlf_input_parses_like_lf() {
    assert_eq!(blocks("# T\r\n\r\nbody\r\n"), blocks("# T\n\nbody\n"));
}

// Headings

#[test]
fn atx_heading() {
    let b = blocks("# Title");
    assert_eq!(b.len(), 1);
    assert_eq!(b[0].kind, BlockKind::heading(1));
    assert_eq!(b[0].html, "<h1>Title</h1>");
}

#[test]
fn atx_heading_levels_and_inline() {
    assert_eq!(
        html("### A *b* ###\n###### six"),
        vec!["<h3>A <em>b</em></h3>", "<h6>six</h6>"]
    );
}

#[test]
fn atx_heading_flushes_open_paragraph() {
    assert_eq!(html("text\n# H"), vec!["<p>text</p>", "<h1>H</h1>"]);
}

#[test]
fn seven_hashes_is_text() {
    assert_eq!(html("####### no"), vec!["<p>####### no</p>"]);
}

#[test]
fn setext_heading_level_one() {
    let b = blocks("Title\n=====");
    assert_eq!(b.len(), 1);
    assert_eq!(b[0].kind, BlockKind::heading(1));
    assert_eq!(b[0].html, "<h1>Title</h1>");
}

#[test]
fn setext_heading_level_two_beats_rule() {
    let b = blocks("Sub **title**\n---\nafter");
    assert_eq!(b[0].kind, BlockKind::heading(2));
    assert_eq!(b[0].html, "<h2>Sub <strong>title</strong></h2>");
    assert_eq!(b[1].html, "<p>after</p>");
}

#[test]
fn setext_promotes_whole_multiline_paragraph() {
    assert_eq!(html("two\nlines\n==="), vec!["<h1>two lines</h1>"]);
}

#[test]
fn rule_after_blank_line_is_not_setext() {
    assert_eq!(html("para\n\n---"), vec!["<p>para</p>", "<hr />"]);
}

// Rules

#[test]
fn horizontal_rules() {
    assert_eq!(html("***\n\n___"), vec!["<hr />", "<hr />"]);
}

// Blockquotes

#[test]
fn blockquote_paragraphs() {
    assert_eq!(
        html("> one\n> two\n>\n> three\n"),
        vec!["<blockquote><p>one two</p><p>three</p></blockquote>"]
    );
}

#[test]
fn blockquote_ends_at_unprefixed_line() {
    assert_eq!(
        html("> quoted\nplain"),
        vec!["<blockquote><p>quoted</p></blockquote>", "<p>plain</p>"]
    );
}

#[test]
fn blockquote_ends_at_blank_line() {
    assert_eq!(
        html("> a\n\n> b"),
        vec![
            "<blockquote><p>a</p></blockquote>",
            "<blockquote><p>b</p></blockquote>"
        ]
    );
}

#[test]
fn blockquote_applies_inline() {
    assert_eq!(
        html("> *quiet* words"),
        vec!["<blockquote><p><em>quiet</em> words</p></blockquote>"]
    );
}

// Lists

#[test]
fn bullet_list() {
    let b = blocks("- a\n- b\n");
    assert_eq!(b.len(), 1);
    assert_eq!(b[0].kind, BlockKind::BulletGroup);
    assert_eq!(b[0].html, "<ul><li>a</li><li>b</li></ul>");
}

#[test]
fn blank_line_splits_bullet_groups() {
    let b = blocks("- a\n\n- b\n");
    assert_eq!(b.len(), 2);
    assert!(b.iter().all(|n| n.kind == BlockKind::BulletGroup));
}

#[test]
fn mixed_bullet_markers_share_a_group() {
    assert_eq!(
        html("- a\n* b\n+ c"),
        vec!["<ul><li>a</li><li>b</li><li>c</li></ul>"]
    );
}

#[test]
fn numbered_list_keeps_numbers() {
    let b = blocks("1. one\n2. two\n10. ten");
    assert_eq!(b.len(), 1);
    assert_eq!(b[0].kind, BlockKind::NumberedGroup);
    assert_eq!(b[0].html, "<ol><li>one</li><li>two</li><li>ten</li></ol>");
    let Some(BlockChildren::Items(items)) = &b[0].children else {
        panic!("expected list items");
    };
    let values: Vec<_> = items.iter().map(|i| i.value.as_str()).collect();
    assert_eq!(values, vec!["1", "2", "10"]);
}

#[test]
fn list_items_do_not_flush_the_other_list_kind() {
    assert_eq!(
        html("1. first\n- second"),
        vec!["<ul><li>second</li></ul>", "<ol><li>first</li></ol>"]
    );
}

#[test]
fn interleaved_list_kinds_collect_into_their_own_groups() {
    assert_eq!(
        html("- a\n1. b\n- c\n"),
        vec!["<ul><li>a</li><li>c</li></ul>", "<ol><li>b</li></ol>"]
    );
}

#[test]
fn list_item_flushes_paragraph() {
    assert_eq!(
        html("intro\n- item"),
        vec!["<p>intro</p>", "<ul><li>item</li></ul>"]
    );
}

#[test]
fn text_after_list_joins_paragraph_committed_before_list() {
    assert_eq!(
        html("- item\ntrailing text"),
        vec!["<p>trailing text</p>", "<ul><li>item</li></ul>"]
    );
}

#[test]
fn emphasis_star_is_not_a_bullet() {
    assert_eq!(html("*soft* start"), vec!["<p><em>soft</em> start</p>"]);
}

// Definition lists

#[test]
fn each_definition_pair_is_its_own_list() {
    let b = blocks("Rust\n: a language\nCargo\n: its build tool\n");
    assert_eq!(b.len(), 2);
    assert!(b.iter().all(|n| n.kind == BlockKind::DefinitionList));
    assert_eq!(b[0].html, "<dl><dt>Rust</dt><dd>a language</dd></dl>");
    assert_eq!(b[1].html, "<dl><dt>Cargo</dt><dd>its build tool</dd></dl>");
    assert_eq!(b[1].children.as_ref().map(BlockChildren::len), Some(1));
}

#[test]
fn definition_flushes_open_paragraph() {
    assert_eq!(
        html("intro\n\nTerm\n: meaning"),
        vec!["<p>intro</p>", "<dl><dt>Term</dt><dd>meaning</dd></dl>"]
    );
}

#[test]
fn term_with_colon_is_not_a_definition() {
    assert_eq!(
        html("Note: this\n: that"),
        vec!["<p>Note: this : that</p>"]
    );
}

// Tables

#[test]
fn table_with_header() {
    let b = blocks("| a | b |\n| - | - |\n| 1 | 2 |\n");
    assert_eq!(b.len(), 1);
    assert_eq!(b[0].kind, BlockKind::Table);
    assert_eq!(
        b[0].html,
        "<table><thead><tr><th>a</th><th>b</th></tr></thead>\
         <tbody><tr><td>1</td><td>2</td></tr></tbody></table>"
    );
    assert_eq!(
        b[0].children,
        Some(BlockChildren::Rows(vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["1".to_string(), "2".to_string()],
        ]))
    );
}

#[test]
fn alignment_row_never_becomes_data() {
    let b = blocks("| a |\n|:--:|\n");
    assert_eq!(b[0].html, "<table><tbody><tr><td>a</td></tr></tbody></table>");
}

#[test]
fn blank_lines_inside_table_are_skipped() {
    let b = blocks("| a |\n\n| b |\nafter");
    assert_eq!(b.len(), 2);
    assert_eq!(b[0].children.as_ref().map(BlockChildren::len), Some(2));
    assert_eq!(b[1].html, "<p>after</p>");
}

#[test]
fn table_cells_are_inline_rendered() {
    let b = blocks("| **h** |\n| `c` |");
    assert_eq!(
        b[0].html,
        "<table><thead><tr><th><strong>h</strong></th></tr></thead>\
         <tbody><tr><td><code>c</code></td></tr></tbody></table>"
    );
}

// Code

#[test]
fn fenced_code_is_escaped_not_inline_rendered() {
    let b = blocks("```html\n<b>**x**</b>\n```");
    assert_eq!(b.len(), 1);
    assert_eq!(b[0].kind, BlockKind::CodeBlock);
    assert_eq!(
        b[0].html,
        r#"<pre><code class="language-html">&lt;b&gt;**x**&lt;/b&gt;</code></pre>"#
    );
    assert_eq!(b[0].language.as_deref(), Some("html"));
}

#[test]
fn fence_without_language_keeps_empty_class() {
    assert_eq!(
        html("~~~\n<b>\n~~~"),
        vec![r#"<pre><code class="language-">&lt;b&gt;</code></pre>"#]
    );
}

#[test]
fn fence_flushes_open_blocks_and_keeps_inner_markup() {
    assert_eq!(
        html("para\n```\n# not a heading\n- not a list\n```\nafter"),
        vec![
            "<p>para</p>",
            "<pre><code class=\"language-\"># not a heading\n- not a list</code></pre>",
            "<p>after</p>",
        ]
    );
}

#[test]
fn other_fence_character_does_not_close() {
    assert_eq!(
        html("```\n~~~\n```"),
        vec![r#"<pre><code class="language-">~~~</code></pre>"#]
    );
}

#[test]
fn unterminated_fence_runs_to_end_of_input() {
    let b = blocks("text\n```\nleft open\n\nstill code");
    assert_eq!(b.len(), 2);
    assert_eq!(
        b[1].html,
        "<pre><code class=\"language-\">left open\n\nstill code</code></pre>"
    );
}

#[test]
fn indented_code_block() {
    let b = blocks("intro\n    let x = 1;\n\n    let y = 2;\nafter");
    assert_eq!(
        b.iter().map(|n| n.html.as_str()).collect::<Vec<_>>(),
        vec![
            "<p>intro</p>",
            "<pre><code>let x = 1;\n\nlet y = 2;</code></pre>",
            "<p>after</p>",
        ]
    );
    assert_eq!(b[1].language.as_deref(), Some(""));
}

#[test]
fn tab_indented_code() {
    assert_eq!(html("\tx < y"), vec!["<pre><code>x &lt; y</code></pre>"]);
}

// Mixed

#[test]
fn every_block_kind_in_one_document() {
    let md = "# Head\n\nText with [a link](u).\n\n> quote\n\n- x\n\n1. y\n\nTerm\n: Def\n\n| c |\n\n```\ncode\n```\n\n---\n";
    let kinds: Vec<_> = blocks(md).iter().map(|b| b.kind.token()).collect();
    assert_eq!(
        kinds,
        vec![
            "h1",
            "paragraph",
            "blockquote",
            "bullet-group",
            "numbered-group",
            "definition-list",
            "table",
            "code-block",
            "hr",
        ]
    );
}

#[test]
fn pathological_inputs_terminate() {
    for md in [
        "```",
        ">",
        "> ",
        "|",
        "    ",
        "\t\n\t\n",
        "#",
        "-",
        "=\n=\n=",
        "1.",
        ": x",
        "a\n: b\n: c",
        "| - |\n| - |",
        "\u{0}\u{feff}é\n",
    ] {
        let _ = blocks(md);
    }
}
