/// Fenced code block type with owned delimiter constant.
///
/// Only backtick fences are recognised. Any line whose trimmed text starts with
/// the marker toggles the fence; the closing line's trailing text is ignored.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Whether the line opens or closes a fence.
    pub fn is_fence(line: &str) -> bool {
        line.trim().starts_with(Self::BACKTICKS)
    }

    /// The language hint after an opening marker, if any (`"```rust"` -> `"rust"`).
    pub fn language(line: &str) -> Option<&str> {
        let hint = line.trim().strip_prefix(Self::BACKTICKS)?.trim();
        (!hint.is_empty()).then_some(hint)
    }
}
