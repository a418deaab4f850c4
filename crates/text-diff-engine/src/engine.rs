//! Diff computation at line, word, and character granularity
//!
//! These are deliberately simple alignment heuristics, not an LCS/Myers
//! diff: line mode compares by index, word mode re-synchronizes with a
//! fixed two-token lookahead, char mode merges consecutive mismatches.
//! The exact output of these heuristics is part of the contract.

use crate::types::{DiffEntry, DiffMode, DiffStats};
use regex::Regex;
use std::sync::OnceLock;

/// How far word mode looks ahead to re-synchronize after a mismatch
const LOOKAHEAD_WINDOW: usize = 2;

/// Compute the differences between two texts at the given granularity
///
/// Total over all inputs: any two strings (including empty ones) produce a
/// result. Entries are emitted in increasing position order on both sides.
///
/// # Example
///
/// ```
/// use text_diff_engine::{compute_diff, DiffKind, DiffMode};
///
/// let (entries, stats) = compute_diff("a\nb", "a\nc", DiffMode::Line);
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].kind, DiffKind::Change);
/// assert_eq!(stats.changes, 1);
/// ```
pub fn compute_diff(text_a: &str, text_b: &str, mode: DiffMode) -> (Vec<DiffEntry>, DiffStats) {
    let entries = match mode {
        DiffMode::Line => line_diff(text_a, text_b),
        DiffMode::Word => word_diff(text_a, text_b),
        DiffMode::Char => char_diff(text_a, text_b),
    };

    let stats = DiffStats::from_entries(&entries);
    log::debug!(
        "computed {:?} diff: {} entries (+{} -{} ~{})",
        mode,
        stats.total_diffs,
        stats.additions,
        stats.deletions,
        stats.changes
    );

    (entries, stats)
}

/// Index-aligned line comparison
///
/// Lines are paired by position, so an inserted line shows up as a run of
/// `Change` entries followed by a trailing `Add`, not as a single insert.
fn line_diff(text_a: &str, text_b: &str) -> Vec<DiffEntry> {
    let lines_a: Vec<&str> = text_a.split('\n').collect();
    let lines_b: Vec<&str> = text_b.split('\n').collect();

    let mut entries = Vec::new();
    for i in 0..lines_a.len().max(lines_b.len()) {
        match (lines_a.get(i), lines_b.get(i)) {
            (None, Some(new)) => entries.push(DiffEntry::add(*new).at_line(i + 1)),
            (Some(old), None) => entries.push(DiffEntry::remove(*old).at_line(i + 1)),
            (Some(old), Some(new)) if old != new => {
                entries.push(DiffEntry::change(*old, *new).at_line(i + 1));
            }
            _ => {}
        }
    }
    entries
}

/// Two-cursor word comparison with bounded lookahead
///
/// The remove-side lookahead is always tried before the add-side one, so
/// on ambiguous input a skipped span in the old text wins over a skipped
/// span in the new text.
fn word_diff(text_a: &str, text_b: &str) -> Vec<DiffEntry> {
    let words_a = split_keep_whitespace(text_a);
    let words_b = split_keep_whitespace(text_b);

    let mut entries = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < words_a.len() || j < words_b.len() {
        if i >= words_a.len() {
            entries.push(DiffEntry::add(words_b[j..].concat()));
            break;
        }
        if j >= words_b.len() {
            entries.push(DiffEntry::remove(words_a[i..].concat()));
            break;
        }

        if words_a[i] == words_b[j] {
            i += 1;
            j += 1;
            continue;
        }

        let mut resynced = false;

        // Does the current new-side token reappear shortly in the old text?
        for k in 1..=LOOKAHEAD_WINDOW {
            if i + k < words_a.len() && words_a[i + k] == words_b[j] {
                entries.push(DiffEntry::remove(words_a[i..i + k].concat()));
                i += k;
                resynced = true;
                break;
            }
        }

        // Or the current old-side token shortly in the new text?
        if !resynced {
            for k in 1..=LOOKAHEAD_WINDOW {
                if j + k < words_b.len() && words_a[i] == words_b[j + k] {
                    entries.push(DiffEntry::add(words_b[j..j + k].concat()));
                    j += k;
                    resynced = true;
                    break;
                }
            }
        }

        if !resynced {
            entries.push(DiffEntry::change(words_a[i], words_b[j]));
            i += 1;
            j += 1;
        }
    }

    entries
}

/// Two-cursor character comparison without lookahead
///
/// Consecutive mismatched positions accumulate into one running `Change`
/// entry, flushed as soon as both texts agree again. Whatever remains on
/// either side at the end is flushed as a single `Add` or `Remove`.
fn char_diff(text_a: &str, text_b: &str) -> Vec<DiffEntry> {
    let chars_a: Vec<char> = text_a.chars().collect();
    let chars_b: Vec<char> = text_b.chars().collect();

    let mut entries = Vec::new();
    let mut pending: Option<(String, String)> = None;
    let (mut i, mut j) = (0, 0);

    fn flush(pending: &mut Option<(String, String)>, entries: &mut Vec<DiffEntry>) {
        if let Some((old, new)) = pending.take() {
            entries.push(DiffEntry::change(old, new));
        }
    }

    while i < chars_a.len() || j < chars_b.len() {
        if i >= chars_a.len() {
            flush(&mut pending, &mut entries);
            entries.push(DiffEntry::add(chars_b[j..].iter().collect::<String>()));
            break;
        }
        if j >= chars_b.len() {
            flush(&mut pending, &mut entries);
            entries.push(DiffEntry::remove(chars_a[i..].iter().collect::<String>()));
            break;
        }

        if chars_a[i] == chars_b[j] {
            flush(&mut pending, &mut entries);
        } else {
            let (old, new) = pending.get_or_insert_with(Default::default);
            old.push(chars_a[i]);
            new.push(chars_b[j]);
        }
        i += 1;
        j += 1;
    }

    flush(&mut pending, &mut entries);
    entries
}

/// Split text into alternating content and whitespace tokens
///
/// Whitespace runs are kept verbatim as their own tokens so that joining
/// the tokens back together reproduces the input exactly. A leading or
/// trailing whitespace run yields an empty token next to it, and the
/// empty string yields a single empty token.
fn split_keep_whitespace(text: &str) -> Vec<&str> {
    static WHITESPACE_RUN: OnceLock<Regex> = OnceLock::new();
    let re = WHITESPACE_RUN.get_or_init(|| Regex::new(r"\s+").unwrap());

    let mut tokens = Vec::new();
    let mut last = 0;
    for m in re.find_iter(text) {
        tokens.push(&text[last..m.start()]);
        tokens.push(m.as_str());
        last = m.end();
    }
    tokens.push(&text[last..]);
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DiffKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_line_diff_identical_texts() {
        let (entries, stats) = compute_diff("a\nb\nc", "a\nb\nc", DiffMode::Line);
        assert!(entries.is_empty());
        assert_eq!(stats, DiffStats::default());
    }

    #[test]
    fn test_line_diff_change() {
        let (entries, _) = compute_diff("a\nb", "a\nc", DiffMode::Line);
        assert_eq!(entries, vec![DiffEntry::change("b", "c").at_line(2)]);
    }

    #[test]
    fn test_line_diff_addition() {
        let (entries, stats) = compute_diff("a", "a\nb", DiffMode::Line);
        assert_eq!(entries, vec![DiffEntry::add("b").at_line(2)]);
        assert_eq!(stats.additions, 1);
        assert_eq!(stats.total_diffs, 1);
    }

    #[test]
    fn test_line_diff_removal() {
        let (entries, _) = compute_diff("a\nb\nc", "a", DiffMode::Line);
        assert_eq!(
            entries,
            vec![
                DiffEntry::remove("b").at_line(2),
                DiffEntry::remove("c").at_line(3),
            ]
        );
    }

    #[test]
    fn test_line_diff_is_index_aligned() {
        // Inserting a line at the top shifts everything, so the naive
        // index pairing reports changes down the file plus one trailing add.
        let (entries, _) = compute_diff("a\nb", "x\na\nb", DiffMode::Line);
        assert_eq!(
            entries,
            vec![
                DiffEntry::change("a", "x").at_line(1),
                DiffEntry::change("b", "a").at_line(2),
                DiffEntry::add("b").at_line(3),
            ]
        );
    }

    #[test]
    fn test_line_diff_preserves_trailing_whitespace() {
        let (entries, _) = compute_diff("a ", "a", DiffMode::Line);
        assert_eq!(entries, vec![DiffEntry::change("a ", "a").at_line(1)]);
    }

    #[test]
    fn test_word_diff_single_change() {
        let (entries, _) = compute_diff("the cat sat", "the dog sat", DiffMode::Word);
        assert_eq!(entries, vec![DiffEntry::change("cat", "dog")]);
    }

    #[test]
    fn test_word_diff_identical() {
        let (entries, stats) = compute_diff("the cat sat", "the cat sat", DiffMode::Word);
        assert!(entries.is_empty());
        assert_eq!(stats.total_diffs, 0);
    }

    #[test]
    fn test_word_diff_resync_via_remove_lookahead() {
        // "quick " was dropped from the old text; the cursor skips over it
        // and re-synchronizes on "fox".
        let (entries, _) = compute_diff("the quick fox", "the fox", DiffMode::Word);
        assert_eq!(entries, vec![DiffEntry::remove("quick ")]);
    }

    #[test]
    fn test_word_diff_resync_via_add_lookahead() {
        let (entries, _) = compute_diff("the fox", "the quick fox", DiffMode::Word);
        assert_eq!(entries, vec![DiffEntry::add("quick ")]);
    }

    #[test]
    fn test_word_diff_remove_lookahead_wins_ties() {
        // Both lookaheads could fire here; the remove side is tried first.
        let (entries, _) = compute_diff("a x a", "a a x", DiffMode::Word);
        assert_eq!(entries[0].kind, DiffKind::Remove);
    }

    #[test]
    fn test_word_diff_trailing_addition_is_one_entry() {
        let (entries, _) = compute_diff("hello", "hello brave new world", DiffMode::Word);
        assert_eq!(entries, vec![DiffEntry::add(" brave new world")]);
    }

    #[test]
    fn test_word_diff_trailing_removal_is_one_entry() {
        let (entries, _) = compute_diff("hello brave new world", "hello", DiffMode::Word);
        assert_eq!(entries, vec![DiffEntry::remove(" brave new world")]);
    }

    #[test]
    fn test_char_diff_single_change() {
        let (entries, _) = compute_diff("abc", "abx", DiffMode::Char);
        assert_eq!(entries, vec![DiffEntry::change("c", "x")]);
    }

    #[test]
    fn test_char_diff_merges_consecutive_mismatches() {
        let (entries, _) = compute_diff("axyd", "abcd", DiffMode::Char);
        assert_eq!(entries, vec![DiffEntry::change("xy", "bc")]);
    }

    #[test]
    fn test_char_diff_flushes_on_resync() {
        let (entries, _) = compute_diff("axbyc", "aXbYc", DiffMode::Char);
        assert_eq!(
            entries,
            vec![DiffEntry::change("x", "X"), DiffEntry::change("y", "Y")]
        );
    }

    #[test]
    fn test_char_diff_trailing_add() {
        let (entries, _) = compute_diff("ab", "abcd", DiffMode::Char);
        assert_eq!(entries, vec![DiffEntry::add("cd")]);
    }

    #[test]
    fn test_char_diff_change_then_trailing_remove() {
        let (entries, _) = compute_diff("axcd", "ab", DiffMode::Char);
        assert_eq!(
            entries,
            vec![DiffEntry::change("x", "b"), DiffEntry::remove("cd")]
        );
    }

    #[test]
    fn test_both_empty_yields_nothing() {
        for mode in [DiffMode::Line, DiffMode::Word, DiffMode::Char] {
            let (entries, stats) = compute_diff("", "", mode);
            assert!(entries.is_empty(), "mode {mode:?}");
            assert_eq!(stats.total_diffs, 0);
        }
    }

    #[test]
    fn test_empty_vs_text_char_mode() {
        let (entries, stats) = compute_diff("", "abc", DiffMode::Char);
        assert_eq!(entries, vec![DiffEntry::add("abc")]);
        assert_eq!(stats.additions, 1);
    }

    #[test]
    fn test_empty_vs_line_is_change_at_line_one() {
        // Splitting "" on newlines yields one empty line, so both sides
        // have a line 1 and the result is a change, not an add.
        let (entries, _) = compute_diff("", "x", DiffMode::Line);
        assert_eq!(entries, vec![DiffEntry::change("", "x").at_line(1)]);
    }

    #[test]
    fn test_stats_invariant_holds() {
        let cases = [
            ("a\nb\nc", "a\nx\nc\nd", DiffMode::Line),
            ("the quick brown fox", "the slow brown wolf", DiffMode::Word),
            ("kitten", "sitting", DiffMode::Char),
        ];
        for (a, b, mode) in cases {
            let (_, stats) = compute_diff(a, b, mode);
            assert_eq!(
                stats.total_diffs,
                stats.additions + stats.deletions + stats.changes
            );
        }
    }

    #[test]
    fn test_split_keep_whitespace_round_trips() {
        for text in ["", " ", "a b", "  a\tb ", "a\n\nb"] {
            let tokens = split_keep_whitespace(text);
            assert_eq!(tokens.concat(), text);
        }
    }

    #[test]
    fn test_split_keep_whitespace_token_shape() {
        assert_eq!(split_keep_whitespace(""), vec![""]);
        assert_eq!(split_keep_whitespace("a b"), vec!["a", " ", "b"]);
        assert_eq!(split_keep_whitespace(" a"), vec!["", " ", "a"]);
        assert_eq!(split_keep_whitespace("a "), vec!["a", " ", ""]);
    }
}
