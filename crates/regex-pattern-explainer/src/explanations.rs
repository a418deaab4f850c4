//! Curated explanation text for well-known regex constructs
//!
//! These are fixed lookup tables; anything not listed falls back to a
//! generic explanation (or no token at all) in the scanner.

/// Shorthand escapes and common bracket expressions
pub(crate) fn character_class(text: &str) -> Option<&'static str> {
    let explanation = match text {
        r"\d" => "Matches any digit (0-9)",
        r"\D" => "Matches any non-digit character",
        r"\w" => "Matches any word character (alphanumeric & underscore)",
        r"\W" => "Matches any non-word character",
        r"\s" => "Matches any whitespace character (space, tab, newline)",
        r"\S" => "Matches any non-whitespace character",
        r"\b" => "Matches a word boundary",
        r"\B" => "Matches a non-word boundary",
        "[A-Z]" => "Matches any uppercase letter from A to Z",
        "[a-z]" => "Matches any lowercase letter from a to z",
        "[0-9]" => "Matches any digit from 0 to 9",
        "[A-Za-z]" => "Matches any letter (case-sensitive)",
        "[^]" => "Matches any character except those in brackets",
        _ => return None,
    };
    Some(explanation)
}

/// Single-character quantifiers and the three `{..}` shapes
pub(crate) fn quantifier(text: &str) -> Option<&'static str> {
    let explanation = match text {
        "*" => "Matches 0 or more times",
        "+" => "Matches 1 or more times",
        "?" => "Matches 0 or 1 time",
        _ => return brace_quantifier(text),
    };
    Some(explanation)
}

/// Classify a `{..}` span by shape: {n}, {n,}, or {n,m}
fn brace_quantifier(text: &str) -> Option<&'static str> {
    let inner = text.strip_prefix('{')?.strip_suffix('}')?;
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());

    match inner.split_once(',') {
        None if all_digits(inner) => Some("Matches exactly n times"),
        Some((n, "")) if all_digits(n) => Some("Matches n or more times"),
        Some((n, m)) if all_digits(n) && all_digits(m) => Some("Matches between n and m times"),
        _ => None,
    }
}

pub(crate) fn anchor(text: &str) -> Option<&'static str> {
    match text {
        "^" => Some("Start of string or line"),
        "$" => Some("End of string or line"),
        _ => None,
    }
}

/// Group explanations keyed by opening prefix
///
/// A pattern like `(?:abc)` is recognized by its `(?:` prefix; any plain
/// `(` is a capturing group. Named groups and other exotic forms fall
/// through to None and produce no token.
pub(crate) fn group(text: &str) -> Option<&'static str> {
    const PREFIXED: &[(&str, &str)] = &[
        ("(?:", "Non-capturing group"),
        ("(?=", "Positive lookahead"),
        ("(?!", "Negative lookahead"),
        ("(?<=", "Positive lookbehind"),
        ("(?<!", "Negative lookbehind"),
    ];

    for &(prefix, explanation) in PREFIXED {
        if text.starts_with(prefix) {
            return Some(explanation);
        }
    }
    if text.starts_with("(?") {
        // Named groups, inline flags, and friends are not explained
        return None;
    }
    text.starts_with('(').then_some("Capturing group")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand_classes() {
        assert_eq!(character_class(r"\d"), Some("Matches any digit (0-9)"));
        assert_eq!(character_class(r"\Q"), None);
    }

    #[test]
    fn test_brace_quantifier_shapes() {
        assert_eq!(quantifier("{3}"), Some("Matches exactly n times"));
        assert_eq!(quantifier("{3,}"), Some("Matches n or more times"));
        assert_eq!(quantifier("{3,5}"), Some("Matches between n and m times"));
        assert_eq!(quantifier("{}"), None);
        assert_eq!(quantifier("{,3}"), None);
        assert_eq!(quantifier("{a}"), None);
        assert_eq!(quantifier("{3"), None);
    }

    #[test]
    fn test_group_prefixes() {
        assert_eq!(group("(abc)"), Some("Capturing group"));
        assert_eq!(group("(?:abc)"), Some("Non-capturing group"));
        assert_eq!(group("(?<=abc)"), Some("Positive lookbehind"));
        assert_eq!(group("(?<!abc)"), Some("Negative lookbehind"));
        assert_eq!(group("(?<name>abc)"), None);
        assert_eq!(group("abc"), None);
    }
}
