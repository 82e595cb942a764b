//! Incremental lexical indexer.
//!
//! Consumes one file's token stream and derives two artifacts without
//! re-reading the buffer:
//!
//! - a [`WordOccurrenceTable`] mapping every identifier-like word to the
//!   union of contexts it appeared in (code, comment, string literal,
//!   plain text), and
//! - a per-pattern count of non-overlapping, non-empty matches found
//!   inside comment/text-bearing tokens.
//!
//! The host supplies the tokenizer (any [`sift_lexer_core::Lexer`]) and a
//! [`Classify`] mapping from its token kinds to [`TokenSemantics`];
//! [`FileScan`] pulls tokens and builds both artifacts in a single
//! synchronous pass. Scans of different files share nothing and can run
//! on separate threads freely.
//!
//! ```
//! use sift_index::{FileScan, TokenSemantics};
//! use sift_patterns::PatternRegistry;
//! # use sift_lexer_core::{Lexer, Span};
//! # #[derive(Clone, Copy)] struct NoTokens;
//! # impl<'src> Lexer<'src> for NoTokens {
//! #     type Kind = u8;
//! #     type State = ();
//! #     fn start(&mut self, _: &'src str, _: Span, _: ()) {}
//! #     fn advance(&mut self) {}
//! #     fn token_kind(&self) -> Option<u8> { None }
//! #     fn token_start(&self) -> u32 { 0 }
//! #     fn token_end(&self) -> u32 { 0 }
//! #     fn state(&self) {}
//! # }
//!
//! let patterns = PatternRegistry::with_default_patterns().snapshot();
//! let classify = |_kind: u8| TokenSemantics::code();
//! let outcome = FileScan::new(NoTokens, "", classify, patterns).run();
//! assert!(outcome.words.is_empty());
//! ```

mod classify;
mod occurrence;
mod scan;

pub use classify::{Classify, TokenSemantics, WordBoundary};
pub use occurrence::{OccurrenceKind, OccurrenceRecorder, WordOccurrenceTable};
pub use scan::{FileScan, ScanOutcome};
