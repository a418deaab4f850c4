//! Type definitions for pattern explanation and testing

use serde::{Deserialize, Serialize};

/// Classification of an explained pattern fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    /// Shorthand (`\d`) or bracketed (`[a-z]`) character class
    CharacterClass,
    /// Repetition operator: `*`, `+`, `?`, or a `{..}` span
    Quantifier,
    /// Position assertion: `^` or `$`
    Anchor,
    /// Parenthesized group, capturing or otherwise
    Group,
    /// Backslash escape of a non-class character
    Escaped,
    /// Plain character with no special meaning
    Literal,
}

/// One explained fragment of a regex source string
///
/// Tokens are emitted in source order; each covers the exact substring it
/// was scanned from, so adjoining tokens never overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternToken {
    /// The exact substring of the pattern this token covers
    #[serde(rename = "pattern")]
    pub text: String,

    /// Human-readable description of what the fragment matches
    pub explanation: String,

    /// What kind of construct the fragment is
    #[serde(rename = "type")]
    pub kind: TokenKind,
}

impl PatternToken {
    pub fn new(text: impl Into<String>, explanation: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            explanation: explanation.into(),
            kind,
        }
    }
}

/// Result of running a compiled pattern against a text
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegexTestReport {
    /// Full text of every match, in order of occurrence
    pub matches: Vec<String>,

    /// The input with every match wrapped in `<mark>..</mark>`
    pub highlighted_text: String,

    /// Per-match capture lists: the full match first, then each capture
    /// group (None when a group did not participate)
    pub capture_groups: Vec<Vec<Option<String>>>,
}
