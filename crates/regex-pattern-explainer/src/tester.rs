//! Compiled-pattern test harness
//!
//! The counterpart to the lexical scanner: here the pattern really is
//! compiled (via the `regex` crate) and run against a text, reporting
//! matches, capture groups, and a `<mark>`-highlighted rendering.

use crate::types::RegexTestReport;
use regex::RegexBuilder;
use thiserror::Error;

/// Errors from compiling or configuring a pattern
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Invalid regular expression pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Unsupported regex flag '{0}'")]
    UnsupportedFlag(char),
}

/// Compile `pattern` with the given flag characters and run it over `text`
///
/// Flags follow the usual one-letter convention: `i` (case-insensitive),
/// `m` (multi-line anchors), `s` (dot matches newline), `x` (ignore
/// pattern whitespace). `g` and `u` are accepted as no-ops since matching
/// is always global and Unicode-aware here. Anything else is rejected.
pub fn test_pattern(
    text: &str,
    pattern: &str,
    flags: &str,
) -> Result<RegexTestReport, PatternError> {
    let mut builder = RegexBuilder::new(pattern);
    for flag in flags.chars() {
        match flag {
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            's' => {
                builder.dot_matches_new_line(true);
            }
            'x' => {
                builder.ignore_whitespace(true);
            }
            'g' | 'u' => {}
            other => return Err(PatternError::UnsupportedFlag(other)),
        }
    }
    let re = builder.build()?;

    let mut report = RegexTestReport::default();
    let mut highlighted = String::new();
    let mut last_end = 0;

    for captures in re.captures_iter(text) {
        // Capture 0 always participates; it is the full match.
        let m = match captures.get(0) {
            Some(m) => m,
            None => continue,
        };

        report.matches.push(m.as_str().to_string());
        report.capture_groups.push(
            captures
                .iter()
                .map(|group| group.map(|g| g.as_str().to_string()))
                .collect(),
        );

        highlighted.push_str(&text[last_end..m.start()]);
        highlighted.push_str("<mark>");
        highlighted.push_str(m.as_str());
        highlighted.push_str("</mark>");
        last_end = m.end();
    }
    highlighted.push_str(&text[last_end..]);
    report.highlighted_text = highlighted;

    log::debug!(
        "pattern {pattern:?} matched {} time(s) in {} byte(s) of text",
        report.matches.len(),
        text.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_matches_and_highlighting() {
        let report = test_pattern("one two three", r"t\w+", "g").unwrap();
        assert_eq!(report.matches, vec!["two", "three"]);
        assert_eq!(report.highlighted_text, "one <mark>two</mark> <mark>three</mark>");
    }

    #[test]
    fn test_capture_groups_include_full_match() {
        let report = test_pattern("2024-01-15", r"(\d{4})-(\d{2})", "").unwrap();
        assert_eq!(
            report.capture_groups,
            vec![vec![
                Some("2024-01".to_string()),
                Some("2024".to_string()),
                Some("01".to_string()),
            ]]
        );
    }

    #[test]
    fn test_non_participating_group_is_none() {
        let report = test_pattern("abc", "a(x)?(b)", "").unwrap();
        assert_eq!(
            report.capture_groups,
            vec![vec![
                Some("ab".to_string()),
                None,
                Some("b".to_string()),
            ]]
        );
    }

    #[test]
    fn test_case_insensitive_flag() {
        let report = test_pattern("Hello hello", "hello", "gi").unwrap();
        assert_eq!(report.matches.len(), 2);
    }

    #[test]
    fn test_no_matches_leaves_text_untouched() {
        let report = test_pattern("plain text", "xyz", "").unwrap();
        assert!(report.matches.is_empty());
        assert!(report.capture_groups.is_empty());
        assert_eq!(report.highlighted_text, "plain text");
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let err = test_pattern("text", "[unclosed", "").unwrap_err();
        assert!(matches!(err, PatternError::InvalidPattern(_)));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = test_pattern("text", "a", "gz").unwrap_err();
        assert!(matches!(err, PatternError::UnsupportedFlag('z')));
    }
}
