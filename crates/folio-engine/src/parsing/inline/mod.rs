//! # Inline Styles
//!
//! Single-pass tokenizer turning one line into styled segments.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSegment` enum (PlainText, Bold, Italic, InlineCode)
//! - **`kinds`**: Inline types with owned delimiters (CodeSpan, Strong, Emphasis)
//! - **`parser`**: `resolve()` main entry point
//!
//! ## Precedence
//!
//! At every position the alternatives are tried in a fixed order: code span,
//! then strong, then emphasis. The leftmost match wins, so `` `**x**` `` is a
//! code span and `**x**` is never read as two empty emphasis spans.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::resolve;
pub use types::{InlineSegment, segments_text};
