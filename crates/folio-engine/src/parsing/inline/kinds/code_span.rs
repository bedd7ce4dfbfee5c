/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw: no emphasis is recognised inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const TICK: &'static str = "`";
}
