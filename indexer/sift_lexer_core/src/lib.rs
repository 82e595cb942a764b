//! Tokenizer-facing core for the sift lexical indexer.
//!
//! This crate defines the seam between the indexer and whatever tokenizer a
//! host language provides:
//!
//! - [`Lexer`] — the contract a host tokenizer must satisfy (resettable
//!   range scanning, resumable state, positioned token accessors).
//! - [`TokenCursor`] — a delegating wrapper that owns the host lexer and
//!   exposes its current token as an ephemeral [`Token`]. Pure forwarding;
//!   no classification happens here.
//! - [`WordIter`] — lazy word segmentation over a span's text, driven by a
//!   plain `Fn(char) -> bool` boundary predicate.
//!
//! Offsets are byte offsets (`u32`) into a shared `&str` buffer. Spans are
//! half-open and never copied out of the buffer.

mod cursor;
mod lexer;
mod span;
mod words;

pub use cursor::{Token, TokenCursor};
pub use lexer::Lexer;
pub use span::Span;
pub use words::{ident_boundary, Word, WordIter};
