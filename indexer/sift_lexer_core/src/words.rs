//! Lazy word segmentation over a span's text.
//!
//! Segmentation is policy-driven: a plain `Fn(char) -> bool` predicate
//! decides which characters continue a word, everything else terminates
//! one, and empty runs are skipped. The consumer picks the policy per
//! surrounding token kind; the segmenter itself is stateless across calls.

use crate::Span;

/// Default boundary policy: letters, digits, and underscore continue a
/// word.
#[inline]
pub fn ident_boundary(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A word found inside a scanned span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Word<'src> {
    /// The word's text, borrowed from the buffer.
    pub text: &'src str,
    /// Buffer-absolute byte span of the word.
    pub span: Span,
}

/// Lazy, finite, restartable iterator over the words in a text span.
///
/// Produced words are in order, non-overlapping, and together with the
/// gaps between them cover the input exactly. `Clone` restarts from the
/// clone's position; no allocation happens per item.
#[derive(Clone)]
pub struct WordIter<'src, P> {
    text: &'src str,
    /// Buffer offset of `text[0]`, so reported spans are buffer-absolute.
    base: u32,
    /// Byte position of the next unexamined character in `text`.
    pos: usize,
    is_word: P,
}

impl<'src, P: Fn(char) -> bool> WordIter<'src, P> {
    /// Segment `text` (located at buffer offset `base`) under `is_word`.
    pub fn new(text: &'src str, base: u32, is_word: P) -> Self {
        Self {
            text,
            base,
            pos: 0,
            is_word,
        }
    }
}

impl<'src, P: Fn(char) -> bool> Iterator for WordIter<'src, P> {
    type Item = Word<'src>;

    #[allow(
        clippy::cast_possible_truncation,
        reason = "word offsets lie within a u32-spanned buffer"
    )]
    fn next(&mut self) -> Option<Word<'src>> {
        // Skip the run of non-word characters.
        let rest = &self.text[self.pos..];
        let Some((offset, _)) = rest.char_indices().find(|&(_, c)| (self.is_word)(c)) else {
            self.pos = self.text.len();
            return None;
        };
        let start = self.pos + offset;

        // Take the run of word characters.
        let end = self.text[start..]
            .char_indices()
            .find(|&(_, c)| !(self.is_word)(c))
            .map_or(self.text.len(), |(offset, _)| start + offset);

        self.pos = end;
        Some(Word {
            text: &self.text[start..end],
            span: Span::new(self.base + start as u32, self.base + end as u32),
        })
    }
}

#[cfg(test)]
mod tests;
