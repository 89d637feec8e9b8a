use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::{reduce_excerpt, Excerpt, EXCERPT_RADIUS};
use lexrule_core::ErrorSite;

fn site(line: &str, index: usize) -> ErrorSite {
    ErrorSite {
        line: line.to_string(),
        index,
        ..ErrorSite::default()
    }
}

#[test]
fn short_line_is_kept_whole() {
    assert_eq!(
        reduce_excerpt(&site("\"for\"p+[a-z", 7)),
        Excerpt {
            text: "\"for\"p+[a-z".to_string(),
            caret: 7,
            indent: " ".repeat(7),
        }
    );
}

#[test]
fn long_line_is_cut_at_layout() {
    let left = "alpha beta gamma delta epsilon";
    let right = "zeta eta theta iota kappa lambda";
    let line = format!("{left} X {right}");
    let at = left.len() + 1;
    let excerpt = reduce_excerpt(&site(&line, at));

    assert_eq!(excerpt.text, "gamma delta epsilon X zeta eta theta iota");
    assert_eq!(excerpt.caret, "gamma delta epsilon ".len());
}

#[test]
fn words_are_never_split() {
    let line = format!("{} !", "w".repeat(50));
    let excerpt = reduce_excerpt(&site(&line, 51));
    assert_eq!(excerpt.text, line);
    assert_eq!(excerpt.caret, 51);
}

#[test]
fn caret_past_line_end_points_after_text() {
    let excerpt = reduce_excerpt(&site("\"abc", 4));
    assert_eq!(excerpt.text, "\"abc");
    assert_eq!(excerpt.caret, 4);
    assert_eq!(excerpt.caret_line(), "    ^");
}

#[test]
fn caret_keeps_tab_indentation() {
    let excerpt = reduce_excerpt(&ErrorSite {
        line: "\t\"a\" \t x".to_string(),
        index: 7,
        trailing_layout: " \t ".to_string(),
        ..ErrorSite::default()
    });
    assert_eq!(excerpt.caret, 7);
    assert_eq!(excerpt.caret_line(), "\t    \t ^");
}

#[test]
fn empty_line() {
    assert_eq!(reduce_excerpt(&site("", 0)), Excerpt::default());
}

#[test]
fn multibyte_characters_count_once() {
    let excerpt = reduce_excerpt(&site("\"мир\"x", 5));
    assert_eq!(excerpt.caret, 5);
    assert_eq!(excerpt.text.chars().nth(excerpt.caret), Some('x'));
}

proptest! {
    #[test]
    fn caret_always_marks_the_error_character(
        line in "[a-z ]{0,80}",
        index in 0usize..90,
    ) {
        let chars: Vec<char> = line.chars().collect();
        let excerpt = reduce_excerpt(&site(&line, index));
        let at = index.min(chars.len());

        prop_assert!(excerpt.text.chars().count() <= chars.len());
        prop_assert_eq!(excerpt.text.chars().nth(excerpt.caret), chars.get(at).copied());
        prop_assert!(excerpt.caret <= at);
    }

    #[test]
    fn excerpt_keeps_the_radius(line in "[a-z ]{0,80}", index in 0usize..80) {
        let chars: Vec<char> = line.chars().collect();
        let at = index.min(chars.len());
        let excerpt = reduce_excerpt(&site(&line, index));

        prop_assert!(excerpt.caret >= at.min(EXCERPT_RADIUS));
        let after = excerpt.text.chars().count() - excerpt.caret;
        prop_assert!(after >= (chars.len() - at).min(EXCERPT_RADIUS));
    }
}
