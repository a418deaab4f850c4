//! Regex Pattern Explainer
//!
//! Two deliberately separate capabilities around regular expressions:
//!
//! - [`explain_pattern`]: a pure lexical scan that decomposes a pattern
//!   source string into human-readable annotated tokens. It never compiles
//!   the pattern, so it also works on patterns that would fail to compile.
//! - [`test_pattern`]: compiles the pattern with the `regex` crate and
//!   runs it against a text, reporting matches, capture groups, and a
//!   highlighted rendering.
//!
//! # Example
//!
//! ```
//! use regex_pattern_explainer::explain_pattern;
//!
//! for token in explain_pattern(r"^\w+$") {
//!     println!("{}  {}", token.text, token.explanation);
//! }
//! ```

mod explanations;
mod scanner;
mod tester;
mod types;

pub use scanner::explain_pattern;
pub use tester::{PatternError, test_pattern};
pub use types::{PatternToken, RegexTestReport, TokenKind};
