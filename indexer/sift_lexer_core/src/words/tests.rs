use pretty_assertions::assert_eq;

use crate::{ident_boundary, Span, Word, WordIter};

fn words_of(text: &str) -> Vec<&str> {
    WordIter::new(text, 0, ident_boundary)
        .map(|w| w.text)
        .collect()
}

#[test]
fn splits_on_non_word_characters() {
    assert_eq!(words_of("foo bar-baz"), vec!["foo", "bar", "baz"]);
}

#[test]
fn underscore_and_digits_continue_words() {
    assert_eq!(words_of("my_var2 = x1"), vec!["my_var2", "x1"]);
}

#[test]
fn empty_runs_are_skipped() {
    assert_eq!(words_of("  ::  "), Vec::<&str>::new());
    assert_eq!(words_of(""), Vec::<&str>::new());
}

#[test]
fn punctuation_heavy_comment() {
    assert_eq!(
        words_of("// TODO: fix foo!"),
        vec!["TODO", "fix", "foo"]
    );
}

#[test]
fn spans_are_buffer_absolute() {
    let words: Vec<Word<'_>> = WordIter::new("ab cd", 10, ident_boundary).collect();
    assert_eq!(words[0].span, Span::new(10, 12));
    assert_eq!(words[1].span, Span::new(13, 15));
}

#[test]
fn unicode_letters_continue_words() {
    assert_eq!(words_of("größe + π"), vec!["größe", "π"]);
}

#[test]
fn custom_policy_changes_boundaries() {
    // Hyphen treated as a word character, as a prose-ish policy would.
    let words: Vec<&str> = WordIter::new("re-lex pass", 0, |c: char| {
        c.is_alphanumeric() || c == '-'
    })
    .map(|w| w.text)
    .collect();
    assert_eq!(words, vec!["re-lex", "pass"]);
}

#[test]
fn clone_restarts_from_the_clone_point() {
    let mut iter = WordIter::new("one two three", 0, ident_boundary);
    let _ = iter.next();
    let resumed: Vec<&str> = iter.clone().map(|w| w.text).collect();
    assert_eq!(resumed, vec!["two", "three"]);
    // The original is unaffected by draining the clone.
    assert_eq!(iter.map(|w| w.text).collect::<Vec<_>>(), vec!["two", "three"]);
}

mod coverage {
    use proptest::prelude::*;

    use crate::{ident_boundary, WordIter};

    proptest! {
        /// Produced spans are in order, non-overlapping, made entirely of
        /// word characters, and every character left in a gap is a
        /// non-word character: total coverage with no double assignment.
        #[test]
        fn segmentation_covers_the_span(text in "[ -~λπß]{0,64}") {
            let words: Vec<_> = WordIter::new(&text, 0, ident_boundary).collect();

            let mut prev_end = 0usize;
            for word in &words {
                let start = word.span.start as usize;
                let end = word.span.end as usize;
                prop_assert!(start >= prev_end, "words out of order or overlapping");
                prop_assert!(start < end, "empty word produced");
                prop_assert!(text.is_char_boundary(start) && text.is_char_boundary(end));
                prop_assert_eq!(word.text, &text[start..end]);
                prop_assert!(word.text.chars().all(ident_boundary));
                prop_assert!(text[prev_end..start].chars().all(|c| !ident_boundary(c)));
                prev_end = end;
            }
            prop_assert!(text[prev_end..].chars().all(|c| !ident_boundary(c)));
        }
    }
}
