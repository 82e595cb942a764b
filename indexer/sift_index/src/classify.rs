//! Host-supplied token classification.
//!
//! The indexer never interprets a grammar's token kinds itself. The host
//! maps each kind to a [`TokenSemantics`] describing what the token
//! contributes: which occurrence kinds its words carry, whether its text
//! is segmented into words at all, whether index patterns are counted in
//! it, and which word-boundary policy applies. The boundary policy is the
//! classifier's choice per kind, not the segmenter's.

use sift_lexer_core::ident_boundary;

use crate::OccurrenceKind;

/// Word-boundary policy: which characters continue a word.
pub type WordBoundary = fn(char) -> bool;

/// What one token kind contributes to the index.
#[derive(Clone, Copy, Debug)]
pub struct TokenSemantics {
    /// Occurrence kinds recorded for each word in the token.
    pub mask: OccurrenceKind,
    /// Whether the token's text is segmented into words.
    pub scan_words: bool,
    /// Whether index patterns are counted in the token (comment-like and
    /// text-bearing kinds).
    pub scan_patterns: bool,
    /// Boundary policy used when segmenting this token's text.
    pub word_boundary: WordBoundary,
}

impl TokenSemantics {
    /// An identifier-bearing code token.
    pub fn code() -> Self {
        Self {
            mask: OccurrenceKind::CODE,
            scan_words: true,
            scan_patterns: false,
            word_boundary: ident_boundary,
        }
    }

    /// A comment token: words recorded, patterns counted.
    pub fn comment() -> Self {
        Self {
            mask: OccurrenceKind::COMMENT,
            scan_words: true,
            scan_patterns: true,
            word_boundary: ident_boundary,
        }
    }

    /// A string (or similar) literal: words recorded, no pattern counting.
    pub fn literal() -> Self {
        Self {
            mask: OccurrenceKind::LITERAL,
            scan_words: true,
            scan_patterns: false,
            word_boundary: ident_boundary,
        }
    }

    /// Plain document text: words recorded, patterns counted.
    pub fn plain_text() -> Self {
        Self {
            mask: OccurrenceKind::PLAIN_TEXT,
            scan_words: true,
            scan_patterns: true,
            word_boundary: ident_boundary,
        }
    }

    /// A token that contributes nothing: no words, no matches. Used for
    /// punctuation, whitespace, and a lexer's unrecognized-character
    /// tokens. The scan still advances past it.
    pub fn opaque() -> Self {
        Self {
            mask: OccurrenceKind::empty(),
            scan_words: false,
            scan_patterns: false,
            word_boundary: ident_boundary,
        }
    }

    /// Replace the word-boundary policy.
    pub fn with_word_boundary(mut self, policy: WordBoundary) -> Self {
        self.word_boundary = policy;
        self
    }

    /// Override whether patterns are counted in this kind.
    pub fn with_patterns(mut self, scan_patterns: bool) -> Self {
        self.scan_patterns = scan_patterns;
        self
    }
}

/// Maps the host grammar's token kinds to their indexing semantics.
///
/// Implemented for plain closures, so a host can pass `|kind| ...`
/// without naming a type.
pub trait Classify<K> {
    /// Semantics of a token of `kind`.
    fn classify(&self, kind: K) -> TokenSemantics;
}

impl<K, F: Fn(K) -> TokenSemantics> Classify<K> for F {
    fn classify(&self, kind: K) -> TokenSemantics {
        self(kind)
    }
}

#[cfg(test)]
mod tests;
