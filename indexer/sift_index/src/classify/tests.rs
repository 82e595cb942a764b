use pretty_assertions::assert_eq;

use crate::{Classify, OccurrenceKind, TokenSemantics};

#[test]
fn comment_and_plain_text_feed_the_pattern_counter() {
    assert!(TokenSemantics::comment().scan_patterns);
    assert!(TokenSemantics::plain_text().scan_patterns);
    assert!(!TokenSemantics::code().scan_patterns);
    assert!(!TokenSemantics::literal().scan_patterns);
}

#[test]
fn opaque_contributes_nothing() {
    let semantics = TokenSemantics::opaque();
    assert!(semantics.mask.is_empty());
    assert!(!semantics.scan_words);
    assert!(!semantics.scan_patterns);
}

#[test]
fn constructors_carry_their_occurrence_kind() {
    assert_eq!(TokenSemantics::code().mask, OccurrenceKind::CODE);
    assert_eq!(TokenSemantics::comment().mask, OccurrenceKind::COMMENT);
    assert_eq!(TokenSemantics::literal().mask, OccurrenceKind::LITERAL);
    assert_eq!(TokenSemantics::plain_text().mask, OccurrenceKind::PLAIN_TEXT);
}

#[test]
fn with_patterns_overrides_the_default() {
    // A host that wants TODOs counted inside string literals.
    assert!(TokenSemantics::literal().with_patterns(true).scan_patterns);
}

#[test]
fn with_word_boundary_replaces_the_policy() {
    fn never(_: char) -> bool {
        false
    }
    let semantics = TokenSemantics::code().with_word_boundary(never);
    assert!(!(semantics.word_boundary)('a'));
}

#[test]
fn closures_classify_without_a_named_type() {
    #[derive(Clone, Copy)]
    enum Kind {
        Comment,
        Other,
    }
    let classifier = |kind: Kind| match kind {
        Kind::Comment => TokenSemantics::comment(),
        Kind::Other => TokenSemantics::opaque(),
    };
    assert_eq!(
        classifier.classify(Kind::Comment).mask,
        OccurrenceKind::COMMENT
    );
    assert!(classifier.classify(Kind::Other).mask.is_empty());
}
