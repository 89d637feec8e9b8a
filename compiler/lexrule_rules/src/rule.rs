//! Parsed rules.

use std::fmt;

use lexrule_core::CharCode;
use smallvec::SmallVec;

use crate::Item;

/// Identifier of a rule within its grammar.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct RuleId(u32);

impl RuleId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        RuleId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for RuleId {
    fn from(raw: u32) -> Self {
        RuleId(raw)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Top-level items of a rule; most rules hold a handful.
pub type RuleItems<C> = SmallVec<[Item<C>; 4]>;

/// A parsed rule: its id and its top-level items.
///
/// A nonterminal rule holds exactly one item, the nonterminal itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rule<C: CharCode> {
    id: RuleId,
    items: RuleItems<C>,
}

impl<C: CharCode> Rule<C> {
    pub(crate) fn new(id: RuleId, items: RuleItems<C>) -> Self {
        Rule { id, items }
    }

    #[inline]
    pub fn id(&self) -> RuleId {
        self.id
    }

    #[inline]
    pub fn items(&self) -> &[Item<C>] {
        &self.items
    }

    pub fn is_nonterminal(&self) -> bool {
        self.items.first().is_some_and(Item::is_nonterminal)
    }

    /// The nonterminal name this rule defines, if it is one.
    pub fn nonterminal(&self) -> Option<&str> {
        match self.items.first().map(|item| &item.kind) {
            Some(crate::ItemKind::Nonterminal(name)) => Some(name),
            _ => None,
        }
    }
}

impl<C: CharCode> fmt::Display for Rule<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
