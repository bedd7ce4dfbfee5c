use std::mem;

use crate::parsing::inline::resolve;

use super::{
    classify::{LineClass, LineClassifier},
    kinds::CodeFence,
    types::BlockNode,
};

/// Renderer state threaded through the lines of one document.
#[derive(Debug)]
enum RenderState {
    Normal,
    InCodeBlock {
        language: Option<String>,
        buffer: Vec<String>,
    },
}

/// Builds block nodes one line at a time.
///
/// Each builder belongs to a single render; the code buffer lives in the
/// `InCodeBlock` state and is dropped with it.
pub struct BlockBuilder {
    classifier: LineClassifier,
    state: RenderState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            classifier: LineClassifier,
            state: RenderState::Normal,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &str) {
        match mem::replace(&mut self.state, RenderState::Normal) {
            RenderState::InCodeBlock { language, buffer } => {
                self.consume_fence_line(line, language, buffer);
            }
            RenderState::Normal => self.push_normal(line),
        }
    }

    pub fn finish(self) -> Vec<BlockNode> {
        if let RenderState::InCodeBlock { language, buffer } = self.state {
            // Unterminated fence: the open buffer is dropped
            log::debug!(
                "dropping unterminated code fence ({} buffered lines, language {:?})",
                buffer.len(),
                language
            );
        }
        self.out
    }

    fn push_normal(&mut self, line: &str) {
        let node = match self.classifier.classify(line) {
            LineClass::Fence { language } => {
                self.state = RenderState::InCodeBlock {
                    language: language.map(str::to_string),
                    buffer: vec![],
                };
                return;
            }
            LineClass::Heading { level, text } => BlockNode::Heading {
                level,
                segments: resolve(text),
            },
            LineClass::Bullet { text } => BlockNode::ListItem(resolve(text)),
            LineClass::Ordinal { label, text } => BlockNode::OrderedListItem {
                label: label.to_string(),
                segments: resolve(text),
            },
            LineClass::Quote { text } => BlockNode::Blockquote(resolve(text)),
            LineClass::Blank => BlockNode::Blank,
            LineClass::Paragraph { text } => BlockNode::Paragraph(resolve(text)),
        };
        self.out.push(node);
    }

    fn consume_fence_line(
        &mut self,
        line: &str,
        language: Option<String>,
        mut buffer: Vec<String>,
    ) {
        if CodeFence::is_fence(line) {
            self.out.push(BlockNode::CodeBlock {
                lines: buffer,
                language,
            });
            return;
        }

        buffer.push(line.to_string());
        self.state = RenderState::InCodeBlock { language, buffer };
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a whole document into block nodes.
///
/// The document is split on `\n`, so a final newline contributes a trailing
/// [`BlockNode::Blank`] and an empty document renders as a single blank.
/// Never fails: anything unrecognised becomes a paragraph or plain text.
pub fn render(document: &str) -> Vec<BlockNode> {
    document
        .split('\n')
        .fold(BlockBuilder::new(), |mut builder, line| {
            builder.push(line);
            builder
        })
        .finish()
}
