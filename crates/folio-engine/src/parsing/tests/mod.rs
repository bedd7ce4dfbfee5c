//! Whole-document properties of the renderer.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{BlockNode, blocks::kinds::CodeFence, plain_text, render};

#[rstest]
#[case(0)]
#[case(1)]
#[case(3)]
#[case(12)]
fn fence_round_trip_keeps_line_count(#[case] n: usize) {
    let body: Vec<String> = (0..n)
        .map(|i| format!("line {i} with `tick` and **stars**"))
        .collect();
    let mut lines = vec!["intro".to_string(), "```text".to_string()];
    lines.extend(body.iter().cloned());
    lines.extend(["```".to_string(), "outro".to_string()]);
    let doc = lines.join("\n");

    let code_blocks: Vec<_> = render(&doc)
        .into_iter()
        .filter(|b| matches!(b, BlockNode::CodeBlock { .. }))
        .collect();
    assert_eq!(code_blocks.len(), 1);

    let BlockNode::CodeBlock { lines, .. } = &code_blocks[0] else {
        unreachable!()
    };
    assert_eq!(lines.len(), n);
    assert!(lines.iter().all(|l| !l.contains(CodeFence::BACKTICKS)));
    assert_eq!(lines, &body);
}

#[test]
fn every_non_fence_line_yields_one_node() {
    let doc = "# A\n\n- b\n1. c\n> d\ne\n```\nx\ny\n```\nf";
    // 11 lines, 4 of them consumed by the fence
    assert_eq!(render(doc).len(), 8);
}

#[test]
fn plain_text_strips_markers() {
    let doc = "## The **DINA** Model\n- *one*\n2. `two`\n> three\n\nfour";
    assert_eq!(
        plain_text(&render(doc)),
        "The DINA Model\none\ntwo\nthree\n\nfour"
    );
}

/// Reconstructed paragraph text never turns into a heading on re-render.
#[rstest]
#[case("Plain paragraph with **bold** and *italic*")]
#[case("  # indented hash is not a heading")]
#[case("#hashtag without space")]
#[case("**#** looks like a heading once stripped")]
fn rerender_does_not_invent_headings(#[case] line: &str) {
    let first = render(line);
    assert!(matches!(first[0], BlockNode::Paragraph(_)));

    let again = render(&plain_text(&first));
    let literal_prefix = plain_text(&first).starts_with("# ");
    assert_eq!(
        matches!(again[0], BlockNode::Heading { .. }),
        literal_prefix
    );
}

#[test]
fn stray_delimiters_never_abort_the_document() {
    let doc = "a * b\n`unclosed\n**half\n```\nnever closed";
    let blocks = render(doc);
    assert_eq!(blocks.len(), 3);
    assert!(blocks.iter().all(|b| matches!(b, BlockNode::Paragraph(_))));
}
