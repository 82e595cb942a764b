//! The contract a host tokenizer must satisfy.

use crate::Span;

/// A resettable, resumable tokenizer over a shared text buffer.
///
/// The indexer drives any implementation of this trait through a
/// [`TokenCursor`](crate::TokenCursor); it never depends on a concrete
/// grammar. Implementations are free to re-tokenize overlapping ranges when
/// resumed mid-file — the indexer's watermark guards against double
/// counting in that case.
///
/// # Accessor validity
///
/// `token_start`, `token_end`, and `state` are meaningful only while
/// `token_kind()` returns `Some`. Between two `advance` calls, repeated
/// accessor reads must return the same values.
pub trait Lexer<'src> {
    /// Grammar-defined token tag.
    type Kind: Copy;

    /// Resumable lexer state, captured per token. `Default` is the state a
    /// fresh scan starts in.
    type State: Copy + Default;

    /// Reset the tokenizer to scan `range` of `buffer`, beginning in
    /// `initial` state, and position it on the first token.
    fn start(&mut self, buffer: &'src str, range: Span, initial: Self::State);

    /// Move to the next token. After the last token, `token_kind()` must
    /// return `None` and further `advance` calls must be harmless.
    fn advance(&mut self);

    /// Kind of the current token, or `None` at end of stream.
    fn token_kind(&self) -> Option<Self::Kind>;

    /// Start offset of the current token in the buffer.
    fn token_start(&self) -> u32;

    /// End offset (exclusive) of the current token in the buffer.
    fn token_end(&self) -> u32;

    /// State the tokenizer can be restarted in to resume after the current
    /// token.
    fn state(&self) -> Self::State;
}
