use crate::parsing::inline::{InlineSegment, segments_text};

/// Heading depth; only the first three levels are recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadingLevel {
    H1 = 1,
    H2 = 2,
    H3 = 3,
}

impl HeadingLevel {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// A rendered block, one per source line (fences excepted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockNode {
    Heading {
        level: HeadingLevel,
        segments: Vec<InlineSegment>,
    },
    /// `- text`
    ListItem(Vec<InlineSegment>),
    /// `<digits>. text`; `label` holds the digits only.
    OrderedListItem {
        label: String,
        segments: Vec<InlineSegment>,
    },
    /// `> text`
    Blockquote(Vec<InlineSegment>),
    /// Lines between two fences, verbatim.
    CodeBlock {
        lines: Vec<String>,
        /// Hint after the opening fence. Recorded, not used for rendering.
        language: Option<String>,
    },
    Paragraph(Vec<InlineSegment>),
    Blank,
}

impl BlockNode {
    /// Inline segments of text-bearing blocks; `None` for code blocks and blanks.
    pub fn segments(&self) -> Option<&[InlineSegment]> {
        match self {
            BlockNode::Heading { segments, .. }
            | BlockNode::ListItem(segments)
            | BlockNode::OrderedListItem { segments, .. }
            | BlockNode::Blockquote(segments)
            | BlockNode::Paragraph(segments) => Some(segments),
            BlockNode::CodeBlock { .. } | BlockNode::Blank => None,
        }
    }

    /// Code block content joined by newlines.
    pub fn code(&self) -> Option<String> {
        match self {
            BlockNode::CodeBlock { lines, .. } => Some(lines.join("\n")),
            _ => None,
        }
    }

    /// The block's text with block and inline markers removed.
    pub fn plain_text(&self) -> String {
        match self {
            BlockNode::CodeBlock { lines, .. } => lines.join("\n"),
            BlockNode::Blank => String::new(),
            _ => self.segments().map(segments_text).unwrap_or_default(),
        }
    }
}
