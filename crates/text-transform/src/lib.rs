//! Text Transform
//!
//! Small pure text utilities: case conversion and lorem ipsum generation.
//! No I/O, no shared state.

mod case;
mod lorem;

pub use case::{CaseMode, convert_case};
pub use lorem::{LoremUnit, lorem_ipsum};
