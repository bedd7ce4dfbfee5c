use std::sync::OnceLock;

use regex::Regex;

use super::{
    kinds::{CodeSpan, Emphasis, Strong},
    types::InlineSegment,
};

/// Builds the tokenizing pattern from the delimiters owned by `kinds`.
///
/// Alternation order is the precedence order; every span is non-empty and
/// confined to one line.
fn inline_style_regex() -> &'static Regex {
    static INLINE_STYLE: OnceLock<Regex> = OnceLock::new();
    INLINE_STYLE.get_or_init(|| {
        let tick = regex::escape(CodeSpan::TICK);
        let strong = regex::escape(Strong::MARKER);
        let em = regex::escape(Emphasis::MARKER);
        let pattern = format!(
            r"{tick}(?P<code>[^{tick}\n]+){tick}|{strong}(?P<bold>[^\n]+?){strong}|{em}(?P<italic>[^{em}\n]+){em}"
        );
        Regex::new(&pattern).expect("Invalid inline style regex")
    })
}

/// Resolves the inline styles of a single line.
///
/// Text between recognised spans becomes [`InlineSegment::PlainText`].
/// Unmatched delimiters stay in the plain text untouched; this never fails.
///
/// Emphasis does not nest: in `**a *b* c**` the strong span runs to the first
/// closing `**`, so the result is one `Bold("a *b* c")`.
///
/// An empty line yields no segments.
pub fn resolve(line: &str) -> Vec<InlineSegment> {
    let mut out = vec![];
    let mut text_start = 0;

    // Helper to flush accumulated text as a PlainText segment
    fn flush_text(out: &mut Vec<InlineSegment>, text: &str) {
        if !text.is_empty() {
            out.push(InlineSegment::PlainText(text.to_string()));
        }
    }

    for caps in inline_style_regex().captures_iter(line) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        let segment = if let Some(m) = caps.name("code") {
            InlineSegment::InlineCode(m.as_str().to_string())
        } else if let Some(m) = caps.name("bold") {
            InlineSegment::Bold(m.as_str().to_string())
        } else if let Some(m) = caps.name("italic") {
            InlineSegment::Italic(m.as_str().to_string())
        } else {
            continue;
        };

        flush_text(&mut out, &line[text_start..whole.start()]);
        text_start = whole.end();
        out.push(segment);
    }

    flush_text(&mut out, &line[text_start..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::segments_text;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use crate::parsing::inline::InlineSegment::*;

    fn plain(s: &str) -> InlineSegment {
        PlainText(s.to_string())
    }

    #[test]
    fn empty_line_has_no_segments() {
        assert!(resolve("").is_empty());
    }

    #[test]
    fn plain_line_is_one_segment() {
        assert_eq!(resolve("hello world"), vec![plain("hello world")]);
    }

    #[test]
    fn bold_in_the_middle() {
        assert_eq!(
            resolve("The **DINA** Model"),
            vec![plain("The "), Bold("DINA".into()), plain(" Model")]
        );
    }

    #[test]
    fn adjacent_bold_and_italic_resolve_independently() {
        assert_eq!(
            resolve("**bold** *italic*"),
            vec![Bold("bold".into()), plain(" "), Italic("italic".into())]
        );
    }

    #[test]
    fn code_span_suppresses_emphasis() {
        assert_eq!(
            resolve("run `**not bold**` now"),
            vec![
                plain("run "),
                InlineCode("**not bold**".into()),
                plain(" now")
            ]
        );
    }

    #[test]
    fn nested_emphasis_stays_literal_inside_bold() {
        assert_eq!(resolve("**a *b* c**"), vec![Bold("a *b* c".into())]);
    }

    #[rstest]
    #[case("***x***", vec![Bold("*x".into()), plain("*")])]
    #[case("**a** b**", vec![Bold("a".into()), plain(" b**")])]
    #[case("**x**y**", vec![Bold("x".into()), plain("y**")])]
    fn strong_span_ends_at_first_closing_marker(
        #[case] line: &str,
        #[case] expected: Vec<InlineSegment>,
    ) {
        assert_eq!(resolve(line), expected);
    }

    #[test]
    fn mixed_line_from_a_post() {
        assert_eq!(
            resolve("- **PermitRootLogin**: Set to `no`"),
            vec![
                plain("- "),
                Bold("PermitRootLogin".into()),
                plain(": Set to "),
                InlineCode("no".into()),
            ]
        );
    }

    #[rstest]
    #[case("2 * 3 = 6")]
    #[case("a lone ` backtick")]
    #[case("**unclosed bold")]
    #[case("``")]
    #[case("****")]
    #[case("*")]
    fn unmatched_delimiters_stay_plain(#[case] line: &str) {
        assert_eq!(resolve(line), vec![plain(line)]);
    }

    #[rstest]
    #[case("The **DINA** Model", "The DINA Model")]
    #[case("*Deterministic Input* and `GDINA`", "Deterministic Input and GDINA")]
    #[case("**a** **b** *c* `d`", "a b c d")]
    #[case("no markers at all", "no markers at all")]
    fn balanced_markers_are_stripped(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(segments_text(&resolve(line)), expected);
    }

    #[test]
    fn italic_around_quoted_text() {
        assert_eq!(
            resolve(r#"The *Deterministic Input, Noisy "And" gate* (DINA)"#),
            vec![
                plain("The "),
                Italic(r#"Deterministic Input, Noisy "And" gate"#.into()),
                plain(" (DINA)"),
            ]
        );
    }

    #[test]
    fn emphasis_does_not_cross_newlines() {
        assert_eq!(resolve("*a\nb*"), vec![plain("*a\nb*")]);
    }
}
