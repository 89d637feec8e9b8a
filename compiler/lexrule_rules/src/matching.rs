//! Matching parsed rules against source text.
//!
//! Greedy, without backtracking: every item takes as many repetitions as it
//! can and the next item continues from there. A repetition stops early
//! once an iteration matches nothing. `PREFIX` is a role tag and does not
//! change what matches.

use lexrule_core::{CharCode, TextCursor};

use crate::stack::ensure_sufficient_stack;
use crate::{Grammar, Item, ItemFlags, ItemKind, Rule, RuleId};

/// The rule chosen at a position and how many characters it covers.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Match {
    pub rule: RuleId,
    pub len: usize,
}

impl<C: CharCode> Rule<C> {
    /// Length of the match starting at the cursor's current character, if
    /// any. Does not move the cursor.
    ///
    /// Nonterminal rules name tokens produced elsewhere and never match.
    pub fn try_match(&self, cursor: &TextCursor<'_, C>) -> Option<usize> {
        if self.is_nonterminal() {
            return None;
        }
        match_sequence(self.items(), matchable_text(cursor))
    }
}

impl<C: CharCode> Grammar<C> {
    /// The longest non-empty match at the cursor; the lowest rule id wins
    /// a tie.
    pub fn longest_match(&self, cursor: &TextCursor<'_, C>) -> Option<Match> {
        let mut best: Option<Match> = None;
        for rule in self.rules() {
            let Some(len) = rule.try_match(cursor).filter(|&len| len > 0) else {
                continue;
            };
            let better = match best {
                None => true,
                Some(best) => len > best.len || (len == best.len && rule.id() < best.rule),
            };
            if better {
                best = Some(Match {
                    rule: rule.id(),
                    len,
                });
            }
        }
        best
    }
}

/// Remaining text up to the end of input; an interior `0` code ends it.
fn matchable_text<'a, C: CharCode>(cursor: &TextCursor<'a, C>) -> &'a [C] {
    let rest = cursor.rest_of_text();
    let end = rest.iter().position(|c| c.is_eof()).unwrap_or(rest.len());
    &rest[..end]
}

fn match_sequence<C: CharCode>(items: &[Item<C>], text: &[C]) -> Option<usize> {
    let mut len = 0;
    for item in items {
        len += match_repeated(item, &text[len..])?;
    }
    Some(len)
}

fn match_repeated<C: CharCode>(item: &Item<C>, text: &[C]) -> Option<usize> {
    let (min, max) = item.bounds();
    let mut len = 0;
    let mut count = 0u32;
    loop {
        if max.is_some_and(|max| count >= max) {
            break;
        }
        let Some(step) = match_once(item, &text[len..]) else {
            break;
        };
        count += 1;
        len += step;
        // Further iterations would match nothing as well.
        if step == 0 {
            return Some(len);
        }
    }
    (count >= min).then_some(len)
}

fn match_once<C: CharCode>(item: &Item<C>, text: &[C]) -> Option<usize> {
    match &item.kind {
        ItemKind::Literal(codes) => {
            let hit = if item.flags.contains(ItemFlags::REVERSE) {
                text.len() >= codes.len() && codes.iter().rev().eq(&text[..codes.len()])
            } else {
                text.starts_with(codes)
            };
            hit.then_some(codes.len())
        }
        ItemKind::CharClass(set) => text
            .first()
            .filter(|c| set.contains(c.to_u32()))
            .map(|_| 1),
        ItemKind::Group(children) => ensure_sufficient_stack(|| match_sequence(children, text)),
        ItemKind::Nonterminal(_) => None,
    }
}

#[cfg(test)]
mod tests;
