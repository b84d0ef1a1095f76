//! Zero-based line/character coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A location inside a script, both fields zero-based.
///
/// `ch` counts characters (Unicode scalar values) from the start of the
/// line, not bytes. Serialized as `{ "line": .., "ch": .. }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number, starting at 0.
    pub line: u32,
    /// Character offset within the line, starting at 0.
    pub ch: u32,
}

impl Position {
    /// Creates a position from zero-based coordinates.
    pub fn new(line: u32, ch: u32) -> Self {
        Self { line, ch }
    }
}

/// Displays as 1-based `line:column`, the form editors print.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.ch + 1)
    }
}
