//! # HTML Presentation
//!
//! Maps every block and inline variant to a fixed element. All text is
//! escaped; the renderer emits no markup of its own beyond these elements.

use std::fmt::Write;

use html_escape::encode_text;

use crate::{
    models::Post,
    parsing::{BlockNode, InlineSegment},
};

/// Renders inline segments.
pub fn render_segments(segments: &[InlineSegment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            InlineSegment::PlainText(s) => out.push_str(&encode_text(s)),
            InlineSegment::Bold(s) => {
                let _ = write!(out, "<strong>{}</strong>", encode_text(s));
            }
            InlineSegment::Italic(s) => {
                let _ = write!(out, "<em>{}</em>", encode_text(s));
            }
            InlineSegment::InlineCode(s) => {
                let _ = write!(out, "<code>{}</code>", encode_text(s));
            }
        }
    }
    out
}

/// Renders one block as a single line of HTML.
pub fn render_block(block: &BlockNode) -> String {
    match block {
        BlockNode::Heading { level, segments } => {
            let n = level.as_u8();
            format!("<h{n}>{}</h{n}>", render_segments(segments))
        }
        BlockNode::ListItem(segments) => format!(
            r#"<div class="list-item"><span class="bullet">•</span><span>{}</span></div>"#,
            render_segments(segments)
        ),
        BlockNode::OrderedListItem { label, segments } => format!(
            r#"<div class="list-item"><span class="ordinal">{}.</span><span>{}</span></div>"#,
            encode_text(label),
            render_segments(segments)
        ),
        BlockNode::Blockquote(segments) => {
            format!("<blockquote>{}</blockquote>", render_segments(segments))
        }
        BlockNode::CodeBlock { lines, .. } => format!(
            r#"<div class="code-block"><pre>{}</pre></div>"#,
            encode_text(&lines.join("\n"))
        ),
        BlockNode::Paragraph(segments) => format!("<p>{}</p>", render_segments(segments)),
        BlockNode::Blank => r#"<div class="spacer"></div>"#.to_string(),
    }
}

/// Renders blocks, one element per line.
pub fn render_blocks(blocks: &[BlockNode]) -> String {
    blocks
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n")
}

const ARTICLE_FOOTER: &str = concat!(
    "<footer>\n",
    r#"<p class="thanks">Thanks for reading!</p>"#,
    "\n",
    r#"<a class="back" href="./">Read another article</a>"#,
    "\n</footer>\n",
);

/// Renders a full article: tag chips, title, date, reading time, body and
/// the closing footer.
pub fn render_article(post: &Post, reading_minutes: usize) -> String {
    let mut out = String::from("<article>\n<header>\n");
    if !post.tags().is_empty() {
        out.push_str(r#"<div class="tags">"#);
        for tag in post.tags() {
            let _ = write!(out, r#"<span class="tag">{}</span>"#, encode_text(tag));
        }
        out.push_str("</div>\n");
    }
    let _ = writeln!(out, "<h1>{}</h1>", encode_text(post.title()));
    let _ = writeln!(
        out,
        r#"<div class="meta"><span class="date">{}</span><span class="reading-time">{} min read</span></div>"#,
        encode_text(post.date()),
        reading_minutes
    );
    out.push_str("</header>\n<div class=\"body\">\n");
    out.push_str(&render_blocks(&post.blocks()));
    out.push_str("\n</div>\n");
    out.push_str(ARTICLE_FOOTER);
    out.push_str("</article>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::render;

    #[test]
    fn segments_are_escaped() {
        assert_eq!(
            render_segments(&[
                InlineSegment::PlainText("a < b & ".into()),
                InlineSegment::InlineCode("<T>".into()),
            ]),
            "a &lt; b &amp; <code>&lt;T&gt;</code>"
        );
    }

    #[test]
    fn document_snapshot() {
        let doc = "## The **DINA** Model\n- *one*\n1. `two`\n> **Note**: three\n\n```r\nx <- 1\n```\nplain";
        insta::assert_snapshot!(render_blocks(&render(doc)), @r#"
        <h2>The <strong>DINA</strong> Model</h2>
        <div class="list-item"><span class="bullet">•</span><span><em>one</em></span></div>
        <div class="list-item"><span class="ordinal">1.</span><span><code>two</code></span></div>
        <blockquote><strong>Note</strong>: three</blockquote>
        <div class="spacer"></div>
        <div class="code-block"><pre>x &lt;- 1</pre></div>
        <p>plain</p>
        "#);
    }

    #[test]
    fn article_wraps_header_and_body() {
        let post = Post::new(
            "t1",
            "Tips & Tricks",
            "May 1, 2025",
            "summary",
            vec!["R".into()],
            "Hello",
        );
        let html = render_article(&post, 1);
        assert!(html.contains(r#"<span class="tag">R</span>"#));
        assert!(html.contains("<h1>Tips &amp; Tricks</h1>"));
        assert!(html.contains("1 min read"));
        assert!(html.contains("<p>Hello</p>"));
    }

    #[test]
    fn article_ends_with_footer() {
        let post = Post::new("t2", "Title", "June 2, 2025", "summary", vec![], "Body");
        let html = render_article(&post, 1);
        let body_end = html.find("<p>Body</p>").unwrap();
        let footer = html.find("<footer>").unwrap();
        assert!(body_end < footer);
        assert!(html.ends_with(
            "<footer>\n<p class=\"thanks\">Thanks for reading!</p>\n<a class=\"back\" href=\"./\">Read another article</a>\n</footer>\n</article>\n"
        ));
        assert!(!html.contains(r#"<div class="tags">"#));
    }
}
