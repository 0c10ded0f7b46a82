//! Shared index types for the scanning algorithms

/// Half-open interval `[start, end)` of character indices over an input
/// sequence.
///
/// Invariant: `start <= end`, and both are bounded by the length of the
/// sequence the span was produced from. Indices count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Inclusive start index
    pub start: usize,
    /// Exclusive end index
    pub end: usize,
}

impl Span {
    /// Create a new span.
    ///
    /// Debug builds assert the ordering invariant; a reversed pair is a
    /// caller bug, not an input condition.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// Empty span anchored at index 0.
    pub fn empty() -> Self {
        Self { start: 0, end: 0 }
    }

    /// Number of characters covered by the span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no characters.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
