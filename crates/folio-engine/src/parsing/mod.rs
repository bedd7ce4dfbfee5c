//! # Parsing
//!
//! Line-oriented renderer for the small Markdown subset used by blog posts.
//!
//! ## Modules
//!
//! - **`inline`**: `resolve()` splits one line into styled `InlineSegment`s
//! - **`blocks`**: `render()` classifies each line of a document and emits `BlockNode`s,
//!   delegating leaf text to `inline`
//!
//! ## Known limitations
//!
//! - Emphasis never nests: `**a *b* c**` is one bold segment containing literal asterisks
//! - Emphasis never spans lines
//! - An unterminated code fence swallows the rest of the document and emits nothing
//! - Lines split on `\n` only; a CRLF document keeps a trailing `\r` on each line

pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

pub use blocks::{BlockNode, HeadingLevel, render};
pub use inline::{InlineSegment, resolve};

/// Flattens rendered blocks back to text with every syntax marker removed.
///
/// One line per block; code blocks contribute their lines verbatim.
pub fn plain_text(blocks: &[BlockNode]) -> String {
    blocks
        .iter()
        .map(BlockNode::plain_text)
        .collect::<Vec<_>>()
        .join("\n")
}
