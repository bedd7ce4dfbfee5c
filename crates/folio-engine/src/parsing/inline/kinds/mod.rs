//! # Inline Kinds
//!
//! Inline types that own their delimiters. The parser builds its pattern
//! from these constants; it never hardcodes `` ` `` or `*`.

pub mod code_span;
pub mod emphasis;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
