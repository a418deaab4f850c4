//! Text case conversion

use serde::{Deserialize, Serialize};

/// Target letter case for [`convert_case`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    Uppercase,
    Lowercase,
    /// First letter of each space-separated word uppercased, rest lowered
    Titlecase,
}

/// Convert a text to the requested case
pub fn convert_case(text: &str, mode: CaseMode) -> String {
    match mode {
        CaseMode::Uppercase => text.to_uppercase(),
        CaseMode::Lowercase => text.to_lowercase(),
        CaseMode::Titlecase => text
            .split(' ')
            .map(title_word)
            .collect::<Vec<_>>()
            .join(" "),
    }
}

fn title_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_uppercase() {
        assert_eq!(convert_case("Hello World", CaseMode::Uppercase), "HELLO WORLD");
    }

    #[test]
    fn test_lowercase() {
        assert_eq!(convert_case("Hello World", CaseMode::Lowercase), "hello world");
    }

    #[test]
    fn test_titlecase() {
        assert_eq!(convert_case("hELLO wORLD", CaseMode::Titlecase), "Hello World");
    }

    #[test]
    fn test_titlecase_preserves_extra_spaces() {
        // Splitting on single spaces keeps empty words, so runs of spaces
        // survive the round trip.
        assert_eq!(convert_case("a  b", CaseMode::Titlecase), "A  B");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(convert_case("", CaseMode::Titlecase), "");
    }
}
