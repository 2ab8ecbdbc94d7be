//! Character spans marking where a pattern matched.

use serde::{Deserialize, Serialize};

/// Half-open character range `[start, end)` into a specific text.
///
/// Offsets count `char`s, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a span from `start` to `end` (exclusive).
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters covered.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when the span covers no characters.
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl From<(usize, usize)> for Span {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}
