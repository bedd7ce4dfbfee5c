//! # Block Rendering
//!
//! Two-phase, line-at-a-time block rendering.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified on its own into a
//!    `LineClass` (fence, heading, list item, ordinal item, quote, blank, paragraph)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` threads a two-state machine
//!    (`Normal` / `InCodeBlock`) over the lines and emits `BlockNode`s
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockNode`, `HeadingLevel`)
//! - **`kinds`**: Block types with owned delimiters (CodeFence, Heading, BulletItem, OrdinalItem, BlockQuote)
//! - **`classify`**: `LineClassifier` produces a `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Classification order is load-bearing: fence, headings (1, 2, 3), bullet, ordinal,
//!   quote, blank, paragraph; the first match wins
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Every input line yields exactly one node, except fence lines and lines inside a fence

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::{BlockBuilder, render};
pub use classify::{LineClass, LineClassifier};
pub use types::{BlockNode, HeadingLevel};
