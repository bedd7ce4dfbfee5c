/// Bold text, delimited by a double asterisk on both sides.
pub struct Strong;

impl Strong {
    pub const MARKER: &'static str = "**";
}

/// Italic text, delimited by a single asterisk on both sides.
pub struct Emphasis;

impl Emphasis {
    pub const MARKER: &'static str = "*";
}
