use crate::parsing::blocks::types::HeadingLevel;

/// ATX-style heading prefixes, checked against the untrimmed line.
pub struct Heading;

impl Heading {
    /// Prefixes in the order they are tried.
    pub const PREFIXES: [(&'static str, HeadingLevel); 3] = [
        ("# ", HeadingLevel::H1),
        ("## ", HeadingLevel::H2),
        ("### ", HeadingLevel::H3),
    ];

    /// Returns the level and the text after the prefix.
    ///
    /// The prefix must start the line exactly; an indented `#` is a paragraph.
    pub fn strip(line: &str) -> Option<(HeadingLevel, &str)> {
        Self::PREFIXES
            .iter()
            .find_map(|&(prefix, level)| line.strip_prefix(prefix).map(|rest| (level, rest)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", Some((HeadingLevel::H1, "Title")))]
    #[case("## Title", Some((HeadingLevel::H2, "Title")))]
    #[case("### Title", Some((HeadingLevel::H3, "Title")))]
    #[case("# ## nested", Some((HeadingLevel::H1, "## nested")))]
    #[case("#### Too deep", None)]
    #[case("#NoSpace", None)]
    #[case(" # indented", None)]
    fn strip_heading(#[case] line: &str, #[case] expected: Option<(HeadingLevel, &str)>) {
        assert_eq!(Heading::strip(line), expected);
    }
}
