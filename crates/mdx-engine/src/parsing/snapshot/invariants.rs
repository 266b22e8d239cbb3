use crate::parsing::blocks::{BlockChildren, BlockKind, BlockNode};

/// Leading tag expected for each block kind.
fn expected_open_tag(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Heading { level } => ["<h1>", "<h2>", "<h3>", "<h4>", "<h5>", "<h6>"]
            [usize::from(level.clamp(1, 6) - 1)],
        BlockKind::Paragraph => "<p>",
        BlockKind::Blockquote => "<blockquote>",
        BlockKind::BulletGroup => "<ul>",
        BlockKind::NumberedGroup => "<ol>",
        BlockKind::DefinitionList => "<dl>",
        BlockKind::Table => "<table>",
        BlockKind::CodeBlock => "<pre><code",
        BlockKind::HorizontalRule => "<hr />",
    }
}

pub fn check(blocks: &[BlockNode]) {
    for b in blocks {
        assert!(
            b.html.starts_with(expected_open_tag(b.kind)),
            "html does not match kind {}: {:?}",
            b.kind.token(),
            b.html
        );

        match (&b.kind, &b.children) {
            (BlockKind::BulletGroup | BlockKind::NumberedGroup, Some(BlockChildren::Items(items))) => {
                assert!(!items.is_empty(), "empty list group: {b:?}");
                for item in items {
                    assert!(
                        b.html.contains(&item.tag),
                        "list html missing item {:?}",
                        item.tag
                    );
                }
            }
            (BlockKind::DefinitionList, Some(BlockChildren::Definitions(defs))) => {
                assert!(!defs.is_empty(), "empty definition list: {b:?}");
            }
            (BlockKind::Table, Some(BlockChildren::Rows(rows))) => {
                assert!(!rows.is_empty(), "empty table: {b:?}");
            }
            (
                BlockKind::BulletGroup
                | BlockKind::NumberedGroup
                | BlockKind::DefinitionList
                | BlockKind::Table,
                other,
            ) => panic!("group block with wrong children {other:?}: {b:?}"),
            (_, Some(children)) => panic!("leaf block with children {children:?}: {b:?}"),
            (_, None) => {}
        }

        assert_eq!(
            b.language.is_some(),
            b.kind == BlockKind::CodeBlock,
            "language set on the wrong kind: {b:?}"
        );
    }
}
