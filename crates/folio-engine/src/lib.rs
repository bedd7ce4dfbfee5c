pub mod content;
pub mod html;
pub mod io;
pub mod models;
pub mod parsing;
pub mod search;
pub mod view;

// Re-export key types for easier usage
pub use models::post::*;
pub use parsing::{BlockNode, HeadingLevel, InlineSegment, render, resolve};
pub use search::*;
pub use view::*;
