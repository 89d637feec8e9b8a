use pretty_assertions::assert_eq;

use super::SymbolTable;
use crate::{RuleGrammarError, RuleId};

#[test]
fn define_and_lookup() {
    let table = SymbolTable::new();
    assert!(table.is_empty());
    assert_eq!(table.define("ident", RuleId::new(3)), Ok(()));
    assert_eq!(table.lookup("ident"), Some(RuleId::new(3)));
    assert_eq!(table.lookup("number"), None);
    assert_eq!(table.len(), 1);
}

#[test]
fn second_definition_names_the_first() {
    let table = SymbolTable::new();
    assert_eq!(table.define("x", RuleId::new(1)), Ok(()));
    assert_eq!(
        table.define("x", RuleId::new(2)),
        Err(RuleGrammarError::DuplicateNonterminal {
            name: "x".to_string(),
            rule: RuleId::new(1),
        })
    );
    assert_eq!(table.lookup("x"), Some(RuleId::new(1)));
}

#[test]
fn clones_share_bindings() {
    let table = SymbolTable::new();
    let handle = table.clone();
    assert_eq!(handle.define("op", RuleId::new(7)), Ok(()));
    assert_eq!(table.lookup("op"), Some(RuleId::new(7)));
}

#[test]
fn names_are_sorted() {
    let table = SymbolTable::new();
    for (name, id) in [("b", 2), ("c", 3), ("a", 1)] {
        assert_eq!(table.define(name, RuleId::new(id)), Ok(()));
    }
    assert_eq!(
        table.names(),
        vec![
            ("a".to_string(), RuleId::new(1)),
            ("b".to_string(), RuleId::new(2)),
            ("c".to_string(), RuleId::new(3)),
        ]
    );
}

#[test]
fn concurrent_definitions_bind_each_name_once() {
    let table = SymbolTable::new();
    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8u32)
            .map(|id| {
                let table = table.clone();
                scope.spawn(move || table.define("shared", RuleId::new(id)).is_ok())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap_or(false)).collect()
    });
    assert_eq!(results.iter().filter(|ok| **ok).count(), 1);
    assert_eq!(table.len(), 1);
}
