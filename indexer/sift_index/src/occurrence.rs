//! Occurrence kinds and the per-file word table.

use bitflags::bitflags;
use rustc_hash::FxHashMap;

bitflags! {
    /// The syntactic contexts a word can occur in, combinable by union.
    ///
    /// A word's final value over a file is the union of every kind it was
    /// seen under. Union is commutative and associative, so the final mask
    /// does not depend on token processing order.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct OccurrenceKind: u8 {
        /// Identifier position in code.
        const CODE = 1 << 0;
        /// Inside a comment's text.
        const COMMENT = 1 << 1;
        /// Inside a string or similar literal.
        const LITERAL = 1 << 2;
        /// Plain document text (non-code files, doc prose).
        const PLAIN_TEXT = 1 << 3;
    }
}

/// Word → occurrence-kind union, accumulated over one file scan.
///
/// Keys keep the case they were encountered with. Built monotonically
/// (unions only); treated as immutable once the scan completes.
pub type WordOccurrenceTable = FxHashMap<String, OccurrenceKind>;

/// Accumulates word occurrences over one file scan.
///
/// Insert-or-union only; there is no removal. Snapshots taken mid-scan
/// reflect every prior [`record`](OccurrenceRecorder::record) call, which
/// is what progressive consumers (search-as-you-type) rely on.
#[derive(Debug, Default)]
pub struct OccurrenceRecorder {
    table: WordOccurrenceTable,
}

impl OccurrenceRecorder {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `word` as seen under `mask`, unioning with any prior kinds.
    ///
    /// The word is only copied out of the buffer on first insertion.
    pub fn record(&mut self, word: &str, mask: OccurrenceKind) {
        if let Some(existing) = self.table.get_mut(word) {
            *existing |= mask;
        } else {
            self.table.insert(word.to_owned(), mask);
        }
    }

    /// The accumulated table. Valid mid-scan.
    pub fn words(&self) -> &WordOccurrenceTable {
        &self.table
    }

    /// Number of distinct words recorded so far.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Consume the recorder, yielding the final table.
    pub fn into_table(self) -> WordOccurrenceTable {
        self.table
    }
}
