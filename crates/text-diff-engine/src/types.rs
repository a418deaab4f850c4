//! Type definitions for text diffing

use serde::{Deserialize, Serialize};

/// Granularity at which two texts are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffMode {
    /// Compare whole lines by index
    #[default]
    Line,
    /// Compare whitespace-delimited word runs with bounded lookahead
    Word,
    /// Compare single characters, merging consecutive mismatches
    Char,
}

/// Classification of a single difference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    /// Content present only in the new text
    Add,
    /// Content present only in the old text
    Remove,
    /// Content present in both texts but not equal
    Change,
}

/// One unit of detected difference between two texts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffEntry {
    /// What happened to this unit
    #[serde(rename = "type")]
    pub kind: DiffKind,

    /// The added or removed unit (line, word run, or character run).
    /// Unused for `Change` entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,

    /// Old-side content of a `Change` entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_line: Option<String>,

    /// New-side content of a `Change` entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_line: Option<String>,

    /// 1-based position of the unit in its source sequence (line mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
}

impl DiffEntry {
    /// Content present only in the new text
    pub fn add(content: impl Into<String>) -> Self {
        Self {
            kind: DiffKind::Add,
            line: Some(content.into()),
            old_line: None,
            new_line: None,
            line_number: None,
        }
    }

    /// Content present only in the old text
    pub fn remove(content: impl Into<String>) -> Self {
        Self {
            kind: DiffKind::Remove,
            line: Some(content.into()),
            old_line: None,
            new_line: None,
            line_number: None,
        }
    }

    /// Content that differs between the two texts
    pub fn change(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            kind: DiffKind::Change,
            line: None,
            old_line: Some(old.into()),
            new_line: Some(new.into()),
            line_number: None,
        }
    }

    /// Attach a 1-based line number
    pub fn at_line(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }
}

/// Aggregate counts over a diff entry sequence
///
/// Always derived from the entries via [`DiffStats::from_entries`],
/// never maintained independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffStats {
    /// Number of `Add` entries
    pub additions: usize,
    /// Number of `Remove` entries
    pub deletions: usize,
    /// Number of `Change` entries
    pub changes: usize,
    /// Total number of entries of any kind
    pub total_diffs: usize,
}

impl DiffStats {
    /// Reduce an entry sequence to its aggregate counts
    pub fn from_entries(entries: &[DiffEntry]) -> Self {
        let mut stats = Self::default();
        for entry in entries {
            match entry.kind {
                DiffKind::Add => stats.additions += 1,
                DiffKind::Remove => stats.deletions += 1,
                DiffKind::Change => stats.changes += 1,
            }
            stats.total_diffs += 1;
        }
        stats
    }
}
