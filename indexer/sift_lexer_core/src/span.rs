//! Half-open byte spans into the shared source buffer.

/// A half-open byte range `[start, end)` into the scanned buffer.
///
/// Spans are indices, never copies: resolving one to text borrows from the
/// buffer via [`Span::text`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    /// Inclusive start offset.
    pub start: u32,
    /// Exclusive end offset.
    pub end: u32,
}

impl Span {
    /// Create a span. `start` must not exceed `end`.
    #[inline]
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start {start} exceeds end {end}");
        Self { start, end }
    }

    /// Length of the span in bytes.
    #[inline]
    pub fn len(self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if the span covers no bytes.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `offset` falls inside the span.
    #[inline]
    pub fn contains(self, offset: u32) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Resolve the span against its buffer.
    ///
    /// # Contract
    ///
    /// The span must lie within `buffer` on character boundaries. An
    /// out-of-range span indicates a cursor/driver desynchronization and
    /// panics via slice indexing rather than clamping.
    #[inline]
    pub fn text(self, buffer: &str) -> &str {
        &buffer[self.start as usize..self.end as usize]
    }
}
