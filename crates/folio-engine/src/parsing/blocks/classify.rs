use crate::parsing::blocks::types::HeadingLevel;

use super::kinds::{BlockQuote, BulletItem, CodeFence, Heading, OrdinalItem};

/// Classification of a single line, before inline resolution.
///
/// Borrowed slices point at the text left after the block prefix is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    Fence { language: Option<&'a str> },
    Heading { level: HeadingLevel, text: &'a str },
    Bullet { text: &'a str },
    Ordinal { label: &'a str, text: &'a str },
    Quote { text: &'a str },
    Blank,
    Paragraph { text: &'a str },
}

/// Classifies individual lines for the block rendering phase.
///
/// Context free: whether a line sits inside a code fence is the builder's
/// concern, not the classifier's.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line; the first matching rule wins.
    ///
    /// Headings are matched on the raw line, every other rule on the trimmed
    /// line. Paragraphs keep the raw line.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if CodeFence::is_fence(line) {
            return LineClass::Fence {
                language: CodeFence::language(line),
            };
        }
        if let Some((level, text)) = Heading::strip(line) {
            return LineClass::Heading { level, text };
        }

        let trimmed = line.trim();
        if let Some(text) = BulletItem::strip(trimmed) {
            return LineClass::Bullet { text };
        }
        if let Some((label, text)) = OrdinalItem::strip(trimmed) {
            return LineClass::Ordinal { label, text };
        }
        if let Some(text) = BlockQuote::strip(trimmed) {
            return LineClass::Quote { text };
        }
        if trimmed.is_empty() {
            return LineClass::Blank;
        }
        LineClass::Paragraph { text: line }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("```bash", LineClass::Fence { language: Some("bash") })]
    #[case("  ```", LineClass::Fence { language: None })]
    #[case("# Title", LineClass::Heading { level: HeadingLevel::H1, text: "Title" })]
    #[case("# ## nested", LineClass::Heading { level: HeadingLevel::H1, text: "## nested" })]
    #[case("### Key Parameters", LineClass::Heading { level: HeadingLevel::H3, text: "Key Parameters" })]
    #[case("  - indented item", LineClass::Bullet { text: "indented item" })]
    #[case("2. **Slipping (s)**", LineClass::Ordinal { label: "2", text: "**Slipping (s)**" })]
    #[case("> **Tip**: test", LineClass::Quote { text: "**Tip**: test" })]
    #[case("   ", LineClass::Blank)]
    #[case("", LineClass::Blank)]
    #[case("#### deep", LineClass::Paragraph { text: "#### deep" })]
    #[case("  plain text ", LineClass::Paragraph { text: "  plain text " })]
    #[case("- ", LineClass::Paragraph { text: "- " })]
    fn classify_line(#[case] line: &str, #[case] expected: LineClass<'static>) {
        assert_eq!(LineClassifier.classify(line), expected);
    }

    #[test]
    fn indented_hash_is_not_a_heading() {
        assert_eq!(
            LineClassifier.classify("  # not a heading"),
            LineClass::Paragraph {
                text: "  # not a heading"
            }
        );
    }
}
