//! Nonterminal symbol table shared by every rule of a grammar.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::{RuleGrammarError, RuleId};

/// Maps nonterminal names to the rule that defines them.
///
/// A cheap handle: clones share the same table. Each name is bound once
/// and never removed; bindings are serialized through the write lock, so
/// rules may be parsed concurrently against one table.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    names: Arc<RwLock<FxHashMap<String, RuleId>>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `rule`.
    ///
    /// # Errors
    ///
    /// [`RuleGrammarError::DuplicateNonterminal`] naming the first binding
    /// if `name` is already bound.
    pub fn define(&self, name: &str, rule: RuleId) -> Result<(), RuleGrammarError> {
        let mut names = self.names.write();
        if let Some(&existing) = names.get(name) {
            return Err(RuleGrammarError::DuplicateNonterminal {
                name: name.to_string(),
                rule: existing,
            });
        }
        names.insert(name.to_string(), rule);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<RuleId> {
        self.names.read().get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.names.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.read().is_empty()
    }

    /// All bindings, sorted by name.
    pub fn names(&self) -> Vec<(String, RuleId)> {
        let mut names: Vec<_> = self
            .names
            .read()
            .iter()
            .map(|(name, &rule)| (name.clone(), rule))
            .collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests;
