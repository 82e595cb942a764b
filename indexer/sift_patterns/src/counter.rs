//! Per-file pattern match counting behind a scanned-bound watermark.

use sift_lexer_core::Span;

use crate::PatternSet;

/// Counts index-pattern matches inside one file's comment/text-bearing
/// tokens.
///
/// One instance per file scan. The instance owns the pattern snapshot,
/// the count table, and the scanned bound; nothing is shared across files
/// or concurrent scans.
///
/// # Scanned bound
///
/// Resumable tokenizers may re-expose text they already produced when a
/// scan restarts mid-file. The bound is a monotonically non-decreasing
/// offset: only the sub-span of a token beyond it is matched, and it
/// advances to the token's end afterwards, so re-exposed text counts
/// exactly once. Spans are assumed to arrive in non-decreasing start
/// order; a span re-emitted below the bound contributes nothing.
#[derive(Debug)]
pub struct PatternCounter {
    patterns: PatternSet,
    counts: Vec<u32>,
    scanned_bound: u32,
}

impl PatternCounter {
    /// Create a counter over `patterns` with all counts at zero.
    pub fn new(patterns: PatternSet) -> Self {
        let counts = vec![0; patterns.len()];
        Self {
            patterns,
            counts,
            scanned_bound: 0,
        }
    }

    /// Count pattern matches in the not-yet-scanned part of `span`.
    ///
    /// Matching covers `[max(span.start, bound), span.end)` of `buffer`.
    /// If that range is empty the call is a no-op and the bound stays put;
    /// this prevents scanning the same comment twice. Each pattern's count
    /// grows by its number of non-overlapping, non-empty matches —
    /// zero-length matches never count. Afterwards the bound advances to
    /// `span.end`.
    pub fn consider(&mut self, buffer: &str, span: Span) {
        let start = span.start.max(self.scanned_bound);
        if start >= span.end {
            return;
        }

        let text = Span::new(start, span.end).text(buffer);
        for (index, pattern) in self.patterns.iter().enumerate() {
            for found in pattern.regex().find_iter(text) {
                if found.start() != found.end() {
                    self.counts[index] += 1;
                }
            }
        }

        self.scanned_bound = span.end;
    }

    /// Advance the bound past `span` without matching.
    ///
    /// Used for tokens that contribute nothing (e.g. a lexer's
    /// unrecognized-character tokens) so a malformed file still moves the
    /// watermark forward and the scan terminates.
    pub fn skip(&mut self, span: Span) {
        self.scanned_bound = self.scanned_bound.max(span.end);
    }

    /// Current counts, ordered parallel to the pattern snapshot.
    ///
    /// Readable mid-scan; reflects every `consider` call so far.
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Consume the counter, yielding the final count table.
    pub fn into_counts(self) -> Vec<u32> {
        self.counts
    }

    /// The pattern snapshot this counter matches against.
    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// The current watermark offset. Never retreats.
    pub fn scanned_bound(&self) -> u32 {
        self.scanned_bound
    }
}

#[cfg(test)]
mod tests;
