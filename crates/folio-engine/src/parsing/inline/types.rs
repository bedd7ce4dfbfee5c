/// A run of text with a single inline style.
///
/// Segments carry their text with the delimiters already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSegment {
    /// Text outside any recognised span, including unmatched delimiters.
    PlainText(String),
    /// `**text**`
    Bold(String),
    /// `*text*`
    Italic(String),
    /// `` `text` `` - contents are never styled further.
    InlineCode(String),
}

impl InlineSegment {
    /// The segment's text without delimiters.
    pub fn text(&self) -> &str {
        match self {
            InlineSegment::PlainText(s)
            | InlineSegment::Bold(s)
            | InlineSegment::Italic(s)
            | InlineSegment::InlineCode(s) => s,
        }
    }
}

/// Concatenates segment text, i.e. the source line with inline markers removed.
pub fn segments_text(segments: &[InlineSegment]) -> String {
    segments.iter().map(InlineSegment::text).collect()
}
