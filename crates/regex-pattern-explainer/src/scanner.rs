//! Lexical pattern scanner
//!
//! Decomposes a regex source string into explained fragments without ever
//! compiling it, so invalid patterns (unbalanced brackets, bad repetition
//! counts) are scanned just as happily as valid ones. Actual matching
//! lives in [`crate::tester`] and goes through the `regex` crate; the two
//! must stay separate passes for exactly that reason.

use crate::explanations;
use crate::types::{PatternToken, TokenKind};

/// Characters that never produce a `Literal` token
const METACHARACTERS: &str = r".*+?{}()[]\|";

/// Decompose a regex source string into an ordered list of explained tokens
///
/// Total over all inputs; a best-effort lexical scan that never fails.
/// The scan is flat: a group runs to the first unescaped `)`, so nested
/// groups are swallowed into the outer token rather than parsed. Bare `.`
/// and `|`, stray closers, unterminated `[`/`(` accumulators, and a
/// trailing backslash all emit nothing.
///
/// # Example
///
/// ```
/// use regex_pattern_explainer::{explain_pattern, TokenKind};
///
/// let tokens = explain_pattern(r"\d+");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].kind, TokenKind::CharacterClass);
/// assert_eq!(tokens[1].kind, TokenKind::Quantifier);
/// ```
pub fn explain_pattern(pattern: &str) -> Vec<PatternToken> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut tokens = Vec::new();

    // Scan state: at most one accumulator is open at a time.
    let mut escaped = false;
    let mut class_buf: Option<String> = None;
    let mut group_buf: Option<String> = None;

    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        i += 1;

        if escaped {
            escaped = false;
            // Inside an open accumulator the escape pair is kept verbatim
            // so that `\]` and `\)` do not close it.
            if let Some(buf) = class_buf.as_mut() {
                buf.push('\\');
                buf.push(ch);
                continue;
            }
            if let Some(buf) = group_buf.as_mut() {
                buf.push('\\');
                buf.push(ch);
                continue;
            }

            let text = format!("\\{ch}");
            if "dDwWsSbB".contains(ch) {
                if let Some(explanation) = explanations::character_class(&text) {
                    tokens.push(PatternToken::new(text, explanation, TokenKind::CharacterClass));
                }
            } else {
                tokens.push(PatternToken::new(
                    text,
                    format!("Matches the literal character \"{ch}\""),
                    TokenKind::Escaped,
                ));
            }
            continue;
        }

        if ch == '\\' {
            escaped = true;
            continue;
        }

        if let Some(buf) = class_buf.as_mut() {
            buf.push(ch);
            if ch == ']' {
                let text = class_buf.take().unwrap_or_default();
                let explanation = explanations::character_class(&text)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Character set: {text}"));
                tokens.push(PatternToken::new(text, explanation, TokenKind::CharacterClass));
            }
            continue;
        }

        if let Some(buf) = group_buf.as_mut() {
            buf.push(ch);
            if ch == ')' {
                let text = group_buf.take().unwrap_or_default();
                // Unknown group forms emit no token at all.
                if let Some(explanation) = explanations::group(&text) {
                    tokens.push(PatternToken::new(text, explanation, TokenKind::Group));
                }
            }
            continue;
        }

        match ch {
            '[' => class_buf = Some(String::from("[")),
            '(' => group_buf = Some(String::from("(")),
            '*' | '+' | '?' => push_quantifier(&mut tokens, ch.to_string()),
            '{' => {
                // Consume through the next `}`, or to end of input if there
                // is none; the unterminated span still becomes a token.
                let mut span = String::from("{");
                while i < chars.len() && chars[i] != '}' {
                    span.push(chars[i]);
                    i += 1;
                }
                if i < chars.len() {
                    span.push(chars[i]);
                    i += 1;
                }
                push_quantifier(&mut tokens, span);
            }
            '^' | '$' => {
                let text = ch.to_string();
                if let Some(explanation) = explanations::anchor(&text) {
                    tokens.push(PatternToken::new(text, explanation, TokenKind::Anchor));
                }
            }
            c if !METACHARACTERS.contains(c) => {
                tokens.push(PatternToken::new(
                    c.to_string(),
                    format!("Matches the literal character \"{c}\""),
                    TokenKind::Literal,
                ));
            }
            // Bare `.`, `|`, and stray `}`/`]` are not explained.
            _ => {}
        }
    }

    log::debug!("explained pattern into {} tokens", tokens.len());
    tokens
}

fn push_quantifier(tokens: &mut Vec<PatternToken>, text: String) {
    let explanation = explanations::quantifier(&text)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Quantifier: {text}"));
    tokens.push(PatternToken::new(text, explanation, TokenKind::Quantifier));
}
