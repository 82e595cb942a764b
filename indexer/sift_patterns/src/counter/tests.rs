use pretty_assertions::assert_eq;
use sift_lexer_core::Span;

use crate::{PatternCounter, PatternRegistry, PatternSet};

fn set_of(sources: &[&str]) -> PatternSet {
    let mut registry = PatternRegistry::new();
    for source in sources {
        registry.add_source(source, true);
    }
    registry.snapshot()
}

#[test]
fn counts_matches_within_span() {
    let mut counter = PatternCounter::new(set_of(&["TODO"]));
    let buffer = "// TODO one, TODO two";
    counter.consider(buffer, Span::new(0, 21));
    assert_eq!(counter.counts(), &[2]);
}

#[test]
fn counts_are_parallel_to_pattern_order() {
    let mut counter = PatternCounter::new(set_of(&["TODO", "FIXME"]));
    let buffer = "TODO then FIXME then FIXME";
    counter.consider(buffer, Span::new(0, 26));
    assert_eq!(counter.counts(), &[1, 2]);
}

#[test]
fn bound_advances_to_span_end() {
    let mut counter = PatternCounter::new(set_of(&["TODO"]));
    counter.consider("TODO......", Span::new(0, 10));
    assert_eq!(counter.scanned_bound(), 10);
}

#[test]
fn covered_span_contributes_nothing_and_keeps_bound() {
    // S1 = [0, 10) then S2 = [5, 8): after S1 the bound is 10, so S2 is
    // already covered and must not re-count its TODO.
    let buffer = "..TODO....";
    let mut counter = PatternCounter::new(set_of(&["TODO"]));
    counter.consider(buffer, Span::new(0, 10));
    assert_eq!(counter.counts(), &[1]);

    counter.consider(buffer, Span::new(5, 8));
    assert_eq!(counter.counts(), &[1]);
    assert_eq!(counter.scanned_bound(), 10);
}

#[test]
fn overlapping_tail_is_counted_once() {
    // Tokens [0, 8) and [4, 16) overlap; the TODO at offset 10 lies in
    // the un-scanned tail and counts, the text under the bound does not.
    let buffer = "TODO......TODO..";
    let mut counter = PatternCounter::new(set_of(&["TODO"]));
    counter.consider(buffer, Span::new(0, 8));
    counter.consider(buffer, Span::new(4, 16));
    assert_eq!(counter.counts(), &[2]);
}

#[test]
fn zero_length_matches_never_count() {
    // `x*` matches the empty string everywhere; only the non-empty run
    // of xs may count.
    let buffer = "..xx..";
    let mut counter = PatternCounter::new(set_of(&["x*"]));
    counter.consider(buffer, Span::new(0, 6));
    assert_eq!(counter.counts(), &[1]);
}

#[test]
fn purely_empty_matcher_counts_zero() {
    let buffer = "anything at all";
    let mut counter = PatternCounter::new(set_of(&[""]));
    counter.consider(buffer, Span::new(0, 15));
    assert_eq!(counter.counts(), &[0]);
}

#[test]
fn skip_advances_bound_without_counting() {
    let buffer = "TODO......";
    let mut counter = PatternCounter::new(set_of(&["TODO"]));
    counter.skip(Span::new(0, 6));
    assert_eq!(counter.scanned_bound(), 6);
    assert_eq!(counter.counts(), &[0]);

    // A later span below the bound stays covered.
    counter.consider(buffer, Span::new(0, 4));
    assert_eq!(counter.counts(), &[0]);
}

#[test]
fn skip_never_retreats_the_bound() {
    let mut counter = PatternCounter::new(PatternSet::empty());
    counter.skip(Span::new(0, 9));
    counter.skip(Span::new(2, 3));
    assert_eq!(counter.scanned_bound(), 9);
}

#[test]
fn empty_snapshot_counts_nothing() {
    let mut counter = PatternCounter::new(PatternSet::empty());
    counter.consider("TODO", Span::new(0, 4));
    assert_eq!(counter.counts(), &[] as &[u32]);
    assert_eq!(counter.scanned_bound(), 4);
}

#[test]
fn into_counts_yields_final_table() {
    let mut counter = PatternCounter::new(set_of(&["TODO"]));
    counter.consider("TODO", Span::new(0, 4));
    assert_eq!(counter.into_counts(), vec![1]);
}
