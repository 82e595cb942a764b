//! Pattern registry and its per-scan snapshot.

use std::sync::Arc;

use crate::IndexPattern;

/// The ordered, reconfigurable list of index patterns.
///
/// Registries live wherever the host keeps configuration; the counting
/// core never sees one. Each scan takes a [`PatternSet`] snapshot up
/// front, so reconfiguring the registry mid-scan cannot affect a scan in
/// flight.
#[derive(Debug, Default)]
pub struct PatternRegistry {
    patterns: Vec<IndexPattern>,
}

impl PatternRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with the conventional defaults: word-bounded
    /// `todo` and `fixme`, case-insensitive, each capturing the rest of
    /// the line.
    pub fn with_default_patterns() -> Self {
        let mut registry = Self::new();
        registry.add_source(r"\btodo\b.*", false);
        registry.add_source(r"\bfixme\b.*", false);
        registry
    }

    /// Append a compiled pattern.
    pub fn add(&mut self, pattern: IndexPattern) {
        self.patterns.push(pattern);
    }

    /// Compile and append `source`. A source that fails to compile is
    /// skipped with a warning rather than aborting; the scan's count
    /// table simply omits it.
    pub fn add_source(&mut self, source: &str, case_sensitive: bool) {
        match IndexPattern::new(source, case_sensitive) {
            Ok(pattern) => self.patterns.push(pattern),
            Err(err) => {
                tracing::warn!(
                    pattern = %err.pattern,
                    error = %err.source,
                    "skipping uncompilable index pattern"
                );
            }
        }
    }

    /// The configured patterns, in order.
    pub fn patterns(&self) -> &[IndexPattern] {
        &self.patterns
    }

    /// Number of configured patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` if no patterns are configured.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Take the immutable snapshot a single file scan works from.
    pub fn snapshot(&self) -> PatternSet {
        PatternSet {
            patterns: self.patterns.clone().into(),
        }
    }
}

/// An immutable, ordered pattern snapshot taken once per scan.
///
/// Cheap to clone and safe to hand to scans running on other threads.
#[derive(Clone, Debug)]
pub struct PatternSet {
    patterns: Arc<[IndexPattern]>,
}

impl PatternSet {
    /// A snapshot with no patterns; counting becomes a no-op.
    pub fn empty() -> Self {
        Self {
            patterns: Arc::from([]),
        }
    }

    /// Number of patterns in the snapshot.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` if the snapshot holds no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterate the patterns in configured order.
    pub fn iter(&self) -> std::slice::Iter<'_, IndexPattern> {
        self.patterns.iter()
    }

    /// The pattern at `index` in configured order.
    pub fn get(&self, index: usize) -> Option<&IndexPattern> {
        self.patterns.get(index)
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a IndexPattern;
    type IntoIter = std::slice::Iter<'a, IndexPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
