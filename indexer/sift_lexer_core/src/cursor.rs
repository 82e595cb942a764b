//! Delegating cursor over a host tokenizer.
//!
//! The cursor owns the wrapped [`Lexer`] and forwards every positioning
//! operation to it unchanged. Its only added behavior is fail-fast span
//! validation: a token reported outside the buffer means the driver and the
//! tokenizer have desynchronized, which is a contract violation, not a
//! recoverable condition.

use crate::{Lexer, Span};

/// A classified, bounded view of the current token.
///
/// Ephemeral: valid only until the next [`TokenCursor::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<K> {
    /// Grammar-defined tag.
    pub kind: K,
    /// Byte span in the shared buffer.
    pub span: Span,
}

/// Owns a host lexer and exposes its token stream one token at a time.
///
/// Pure delegation boundary: no classification or indexing happens here,
/// so the indexer can run atop any grammar's tokenizer.
pub struct TokenCursor<'src, L> {
    lexer: L,
    buffer: &'src str,
}

impl<'src, L: Lexer<'src>> TokenCursor<'src, L> {
    /// Start `lexer` over `range` of `buffer` in `initial` state and wrap it.
    ///
    /// # Panics
    ///
    /// Panics if `range` or the first reported token falls outside `buffer`.
    pub fn start(mut lexer: L, buffer: &'src str, range: Span, initial: L::State) -> Self {
        assert!(
            range.end as usize <= buffer.len(),
            "scan range {range:?} exceeds buffer length {}",
            buffer.len()
        );
        lexer.start(buffer, range, initial);
        let cursor = Self { lexer, buffer };
        cursor.check_token_bounds();
        cursor
    }

    /// Re-position the wrapped lexer over `range`, resuming in `state`.
    ///
    /// Forwards to [`Lexer::start`] on the same buffer. Used by hosts that
    /// resume lexing mid-file from a saved token state.
    pub fn restart(&mut self, range: Span, state: L::State) {
        assert!(
            range.end as usize <= self.buffer.len(),
            "scan range {range:?} exceeds buffer length {}",
            self.buffer.len()
        );
        self.lexer.start(self.buffer, range, state);
        self.check_token_bounds();
    }

    /// Move to the next token.
    pub fn advance(&mut self) {
        self.lexer.advance();
        self.check_token_bounds();
    }

    /// The current token, or `None` at end of stream.
    ///
    /// Idempotent: repeated calls between advances return the same token.
    #[inline]
    pub fn token(&self) -> Option<Token<L::Kind>> {
        let kind = self.lexer.token_kind()?;
        Some(Token {
            kind,
            span: Span::new(self.lexer.token_start(), self.lexer.token_end()),
        })
    }

    /// Text of the current token, borrowed from the buffer.
    #[inline]
    pub fn token_text(&self) -> Option<&'src str> {
        Some(self.token()?.span.text(self.buffer))
    }

    /// Resumable state of the wrapped lexer.
    #[inline]
    pub fn state(&self) -> L::State {
        self.lexer.state()
    }

    /// The shared buffer under scan.
    #[inline]
    pub fn buffer(&self) -> &'src str {
        self.buffer
    }

    /// Fail fast on a token span the buffer cannot contain.
    fn check_token_bounds(&self) {
        if self.lexer.token_kind().is_some() {
            let start = self.lexer.token_start();
            let end = self.lexer.token_end();
            assert!(
                start <= end && end as usize <= self.buffer.len(),
                "lexer reported token span [{start}, {end}) outside buffer of length {}",
                self.buffer.len()
            );
        }
    }
}
