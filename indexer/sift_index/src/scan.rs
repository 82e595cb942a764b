//! The per-file scan driver.

use sift_lexer_core::{Lexer, Span, TokenCursor, WordIter};
use sift_patterns::{PatternCounter, PatternSet};

use crate::{Classify, OccurrenceRecorder, WordOccurrenceTable};

/// The two artifacts of a completed file scan, read-only from here on.
#[derive(Debug)]
pub struct ScanOutcome {
    /// Word → union of occurrence kinds.
    pub words: WordOccurrenceTable,
    /// Per-pattern match counts, parallel to the scan's pattern snapshot.
    pub pattern_counts: Vec<u32>,
}

/// A single file's indexing scan: a synchronous pull loop over the token
/// stream.
///
/// Each [`step`](FileScan::step) classifies one token, records its words
/// under the kind's occurrence mask, and feeds comment-like spans to the
/// pattern counter. Partial results are readable between steps, and a
/// caller may simply stop stepping and drop the scan to cancel it.
/// Nothing is shared between instances, so scans of different files can
/// run in parallel without locking.
pub struct FileScan<'src, L: Lexer<'src>, C> {
    cursor: TokenCursor<'src, L>,
    classifier: C,
    recorder: OccurrenceRecorder,
    counter: PatternCounter,
    tokens_seen: u64,
}

impl<'src, L, C> FileScan<'src, L, C>
where
    L: Lexer<'src>,
    C: Classify<L::Kind>,
{
    /// Start a scan of the whole `buffer` with a fresh recorder and a
    /// fresh counter over `patterns`.
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is longer than `u32::MAX` bytes.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "buffer length is asserted to fit in u32 first"
    )]
    pub fn new(lexer: L, buffer: &'src str, classifier: C, patterns: PatternSet) -> Self {
        assert!(
            u32::try_from(buffer.len()).is_ok(),
            "buffer of {} bytes exceeds the u32 offset space",
            buffer.len()
        );
        let range = Span::new(0, buffer.len() as u32);
        Self {
            cursor: TokenCursor::start(lexer, buffer, range, L::State::default()),
            classifier,
            recorder: OccurrenceRecorder::new(),
            counter: PatternCounter::new(patterns),
            tokens_seen: 0,
        }
    }

    /// Process the current token and advance. Returns `false` at end of
    /// stream.
    pub fn step(&mut self) -> bool {
        let Some(token) = self.cursor.token() else {
            return false;
        };
        let semantics = self.classifier.classify(token.kind);

        if semantics.scan_words && !semantics.mask.is_empty() {
            let text = token.span.text(self.cursor.buffer());
            for word in WordIter::new(text, token.span.start, semantics.word_boundary) {
                self.recorder.record(word.text, semantics.mask);
            }
        }

        if semantics.scan_patterns {
            self.counter.consider(self.cursor.buffer(), token.span);
        } else if semantics.mask.is_empty() {
            // Opaque tokens (unrecognized characters included) still move
            // the watermark so a malformed file terminates cleanly.
            self.counter.skip(token.span);
        }

        self.tokens_seen += 1;
        self.cursor.advance();
        true
    }

    /// Words recorded so far. Valid mid-scan.
    pub fn words(&self) -> &WordOccurrenceTable {
        self.recorder.words()
    }

    /// Pattern counts so far, parallel to the snapshot. Valid mid-scan.
    pub fn pattern_counts(&self) -> &[u32] {
        self.counter.counts()
    }

    /// Drive the scan to end of stream and return both artifacts.
    pub fn run(mut self) -> ScanOutcome {
        while self.step() {}
        tracing::debug!(
            tokens = self.tokens_seen,
            words = self.recorder.len(),
            matches = self.counter.counts().iter().sum::<u32>(),
            "file scan complete"
        );
        ScanOutcome {
            words: self.recorder.into_table(),
            pattern_counts: self.counter.into_counts(),
        }
    }
}
