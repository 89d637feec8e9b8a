use pretty_assertions::assert_eq;

use crate::{parse_rule, GrammarBuilder, GrammarConfig, Match, Rule, RuleId, SymbolTable};
use lexrule_core::SourceText;

fn rule(text: &str) -> Rule<u8> {
    match parse_rule(RuleId::new(1), text, &SymbolTable::new()) {
        Ok(rule) => rule,
        Err(e) => panic!("{text}: {e}"),
    }
}

fn match_len(rule_text: &str, input: &str) -> Option<usize> {
    let source = SourceText::<u8>::new(input);
    let mut cursor = source.cursor();
    cursor.raw_char();
    rule(rule_text).try_match(&cursor)
}

#[test]
fn literal_matches_exactly() {
    assert_eq!(match_len(r#""for""#, "for x"), Some(3));
    assert_eq!(match_len(r#""for""#, "fo"), None);
    assert_eq!(match_len(r#""for""#, "far"), None);
}

#[test]
fn keyword_with_identifier_tail() {
    let rule = r#""for"p+[a-zA-Z_]*"#;
    assert_eq!(match_len(rule, "forforabc_Z9"), Some(11));
    assert_eq!(match_len(rule, "for "), Some(3));
    assert_eq!(match_len(rule, "fo"), None);
}

#[test]
fn repetition_bounds() {
    assert_eq!(match_len("[0-9]*", "abc"), Some(0));
    assert_eq!(match_len("[0-9]+", "abc"), None);
    assert_eq!(match_len("[0-9]+", "123a"), Some(3));
    assert_eq!(match_len(r#""-"?[0-9]"#, "-7"), Some(2));
    assert_eq!(match_len(r#""-"?[0-9]"#, "7"), Some(1));
    assert_eq!(match_len("[0-9a-f]{4}", "12ab!"), Some(4));
    assert_eq!(match_len("[0-9a-f]{4}", "12a!"), None);
    assert_eq!(match_len("[0-9a-f]{2}", "12ab"), Some(2));
}

#[test]
fn repetition_is_greedy_without_backtracking() {
    assert_eq!(match_len(r#"[a-z]*"z""#, "abz"), None);
    assert_eq!(match_len(r#"[a-y]*"z""#, "abz"), Some(3));
}

#[test]
fn groups_match_in_sequence() {
    assert_eq!(match_len(r#"[0-9]+("."[0-9]+)?"#, "3.14;"), Some(4));
    assert_eq!(match_len(r#"[0-9]+("."[0-9]+)?"#, "3.;"), Some(1));
    assert_eq!(match_len(r#"("ab")+"#, "ababa"), Some(4));
}

#[test]
fn zero_length_iteration_stops_the_loop() {
    assert_eq!(match_len(r#"("a"?)*"b""#, "aab"), Some(3));
    assert_eq!(match_len(r#"("a"?)*"b""#, "b"), Some(1));
    assert_eq!(match_len(r#"("a"*){3}"#, "x"), Some(0));
}

#[test]
fn reverse_matches_backwards() {
    assert_eq!(match_len(r#""abc"r"#, "cba"), Some(3));
    assert_eq!(match_len(r#""abc"r"#, "abc"), None);
}

#[test]
fn prefix_does_not_change_matching() {
    assert_eq!(match_len(r#""ab"p"#, "abc"), match_len(r#""ab""#, "abc"));
}

#[test]
fn nonterminal_rules_never_match() {
    assert_eq!(match_len("'ident'", "ident"), None);
}

#[test]
fn matching_stops_at_interior_nul() {
    assert_eq!(match_len("[a-z]*", "ab\0cd"), Some(2));
}

#[test]
fn matching_starts_at_current_character_and_keeps_the_cursor() {
    let source = SourceText::<u8>::new("  abc");
    let mut cursor = source.cursor();
    cursor.clean_char();
    let rule = rule("[a-z]+");
    assert_eq!(rule.try_match(&cursor), Some(3));
    assert_eq!(cursor.position(), 2);
}

#[test]
fn longest_match_prefers_length_then_lowest_id() {
    let mut builder = GrammarBuilder::new(GrammarConfig::default());
    builder
        .rule(5, r#"[a-z]+"#)
        .rule(2, r#""if""#)
        .rule(3, r#""if""#)
        .rule(4, r#""=""#)
        .rule(1, r#""==""#)
        .rule(6, "'ident'");
    let grammar = match builder.build::<u8>() {
        Ok(grammar) => grammar,
        Err(errors) => panic!("{errors:?}"),
    };

    let at = |input: &str| {
        let source = SourceText::<u8>::new(input);
        let mut cursor = source.cursor();
        cursor.raw_char();
        grammar.longest_match(&cursor)
    };

    assert_eq!(
        at("if "),
        Some(Match {
            rule: RuleId::new(2),
            len: 2
        })
    );
    assert_eq!(
        at("iffy"),
        Some(Match {
            rule: RuleId::new(5),
            len: 4
        })
    );
    assert_eq!(
        at("==="),
        Some(Match {
            rule: RuleId::new(1),
            len: 2
        })
    );
    assert_eq!(at("42"), None);
}
