/// Blockquote block type with owned prefix constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The quote prefix, including its mandatory space.
    pub const PREFIX: &'static str = "> ";

    /// Returns the quoted text when the trimmed line is a quote.
    ///
    /// Only one level is recognised: `"> > x"` quotes the text `"> x"`.
    pub fn strip(trimmed: &str) -> Option<&str> {
        trimmed.strip_prefix(Self::PREFIX)
    }
}
