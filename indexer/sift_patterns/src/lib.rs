//! Index patterns and in-comment match counting.
//!
//! An [`IndexPattern`] is a configured text matcher (e.g. `TODO`) counted
//! inside comment and text-bearing tokens. The [`PatternRegistry`] owns the
//! configured list and hands out immutable [`PatternSet`] snapshots, one
//! per file scan, so the counting core carries no hidden shared state and
//! scans of different files can run in parallel.
//!
//! [`PatternCounter`] does the per-file counting behind a monotonic
//! scanned-bound watermark, so tokenizers that re-expose overlapping
//! ranges when resumed mid-file never double-count.

mod counter;
mod pattern;
mod registry;

pub use counter::PatternCounter;
pub use pattern::{IndexPattern, PatternError};
pub use registry::{PatternRegistry, PatternSet};
