use std::sync::OnceLock;

use regex::Regex;

/// Unordered list item: `- text`.
pub struct BulletItem;

impl BulletItem {
    pub const PREFIX: &'static str = "- ";

    pub fn strip(trimmed: &str) -> Option<&str> {
        trimmed.strip_prefix(Self::PREFIX)
    }
}

/// Ordered list item: `<digits>. text`.
pub struct OrdinalItem;

impl OrdinalItem {
    fn regex() -> &'static Regex {
        static ORDINAL: OnceLock<Regex> = OnceLock::new();
        ORDINAL.get_or_init(|| Regex::new(r"^([0-9]+)\.\s").expect("Invalid ordinal regex"))
    }

    /// Returns `(label, rest)` for a trimmed line starting with an ordinal.
    pub fn strip(trimmed: &str) -> Option<(&str, &str)> {
        let caps = Self::regex().captures(trimmed)?;
        let label = caps.get(1)?.as_str();
        let rest = &trimmed[caps.get(0)?.end()..];
        Some((label, rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn bullet() {
        assert_eq!(BulletItem::strip("- item"), Some("item"));
        assert_eq!(BulletItem::strip("-item"), None);
    }

    #[rstest]
    #[case("1. first", Some(("1", "first")))]
    #[case("12. twelfth", Some(("12", "twelfth")))]
    #[case("3.\ttabbed", Some(("3", "tabbed")))]
    #[case("1.5 is a number", None)]
    #[case("1) paren", None)]
    #[case("a. letter", None)]
    fn ordinal(#[case] line: &str, #[case] expected: Option<(&str, &str)>) {
        assert_eq!(OrdinalItem::strip(line), expected);
    }
}
