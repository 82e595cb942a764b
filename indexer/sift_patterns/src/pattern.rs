//! A single configured index pattern.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// A pattern source that failed to compile.
#[derive(Debug, Error)]
#[error("invalid index pattern `{pattern}`: {source}")]
pub struct PatternError {
    /// The offending pattern source text.
    pub pattern: String,
    /// The underlying regex compile error.
    #[source]
    pub source: regex::Error,
}

/// A compiled text matcher counted within comment/text-bearing tokens.
///
/// Read-only to the counting core; owned by the [`PatternRegistry`]
/// (`crate::PatternRegistry`) that configured it.
#[derive(Clone, Debug)]
pub struct IndexPattern {
    source: String,
    case_sensitive: bool,
    regex: Regex,
}

impl IndexPattern {
    /// Compile `source` as an index pattern.
    ///
    /// Case-insensitive patterns are compiled with the regex engine's
    /// case folding rather than by rewriting the source.
    pub fn new(source: &str, case_sensitive: bool) -> Result<Self, PatternError> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(!case_sensitive)
            .build()
            .map_err(|err| PatternError {
                pattern: source.to_owned(),
                source: err,
            })?;
        Ok(Self {
            source: source.to_owned(),
            case_sensitive,
            regex,
        })
    }

    /// The pattern source text as configured.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether matching respects letter case.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }
}
