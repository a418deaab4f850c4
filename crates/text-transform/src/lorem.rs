//! Lorem ipsum generation

use serde::{Deserialize, Serialize};

/// Unit of generated filler text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoremUnit {
    Words,
    #[default]
    Paragraphs,
}

/// Paragraph generation is capped here regardless of the requested count
const MAX_PARAGRAPHS: usize = 10;

const SENTENCES: [&str; 10] = [
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
    "Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
    "Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.",
    "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.",
    "Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.",
    "Sed ut perspiciatis unde omnis iste natus error sit voluptatem accusantium doloremque laudantium.",
    "Nemo enim ipsam voluptatem quia voluptas sit aspernatur aut odit aut fugit.",
    "Neque porro quisquam est, qui dolorem ipsum quia dolor sit amet, consectetur, adipisci velit.",
    "Quis autem vel eum iure reprehenderit qui in ea voluptate velit esse quam nihil molestiae consequatur.",
    "At vero eos et accusamus et iusto odio dignissimos ducimus qui blanditiis praesentium voluptatum.",
];

/// Generate filler text by cycling through a fixed sentence list
///
/// `Words` yields exactly `count` space-separated words; `Paragraphs`
/// yields between 1 and 10 paragraphs separated by blank lines, clamping
/// `count` into that range.
pub fn lorem_ipsum(count: usize, unit: LoremUnit) -> String {
    match unit {
        LoremUnit::Words => {
            let all_words: Vec<&str> = SENTENCES
                .iter()
                .flat_map(|s| s.split_whitespace())
                .collect();
            (0..count)
                .map(|i| all_words[i % all_words.len()])
                .collect::<Vec<_>>()
                .join(" ")
        }
        LoremUnit::Paragraphs => {
            let paragraphs = count.clamp(1, MAX_PARAGRAPHS);
            (0..paragraphs)
                .map(|i| SENTENCES[i % SENTENCES.len()])
                .collect::<Vec<_>>()
                .join("\n\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_word_count() {
        let text = lorem_ipsum(7, LoremUnit::Words);
        assert_eq!(text.split_whitespace().count(), 7);
        assert!(text.starts_with("Lorem ipsum dolor"));
    }

    #[test]
    fn test_zero_words_is_empty() {
        assert_eq!(lorem_ipsum(0, LoremUnit::Words), "");
    }

    #[test]
    fn test_paragraph_count() {
        let text = lorem_ipsum(3, LoremUnit::Paragraphs);
        assert_eq!(text.split("\n\n").count(), 3);
    }

    #[test]
    fn test_paragraph_count_is_clamped() {
        assert_eq!(lorem_ipsum(0, LoremUnit::Paragraphs).split("\n\n").count(), 1);
        assert_eq!(
            lorem_ipsum(99, LoremUnit::Paragraphs).split("\n\n").count(),
            10
        );
    }

    #[test]
    fn test_word_list_cycles() {
        let total_words: usize = SENTENCES.iter().map(|s| s.split_whitespace().count()).sum();
        let text = lorem_ipsum(total_words + 1, LoremUnit::Words);
        assert!(text.ends_with(" Lorem"));
    }
}
