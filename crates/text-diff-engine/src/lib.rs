//! Text Diff Engine
//!
//! Computes element-level differences between two texts at line, word, or
//! character granularity, plus aggregate statistics. Pure and synchronous:
//! no I/O, no shared state, safe to call from any thread or task.
//!
//! # Example
//!
//! ```
//! use text_diff_engine::{compute_diff, DiffMode};
//!
//! let (entries, stats) = compute_diff("the cat sat", "the dog sat", DiffMode::Word);
//! assert_eq!(stats.changes, 1);
//! for entry in &entries {
//!     // Render, serialize, etc.
//! }
//! ```

mod engine;
mod types;

pub use engine::compute_diff;
pub use types::{DiffEntry, DiffKind, DiffMode, DiffStats};
