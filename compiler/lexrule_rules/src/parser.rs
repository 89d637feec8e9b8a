//! Recursive-descent parser for the rule DSL.
//!
//! A rule is a sequence of items, each optionally followed by modifiers:
//!
//! | Text | Meaning |
//! |------|---------|
//! | `"..."` | literal |
//! | `[...]` | character class |
//! | `(...)` | group of items |
//! | `'name'` | nonterminal, the only item of its rule |
//! | `*` `+` `?` `{n}` | repetition of the current item |
//! | `p` | prefix role of the current item |
//! | `r` | reversed matching of the current item |
//!
//! The parser is a [`Scanner`] in clean mode, so layout between items is
//! ignored, and configured comments are skipped. Groups are carved out with
//! [`find_bracket`] and parsed by a nested parser over a forked cursor.

use lexrule_core::{
    begin_scanning, decode_string, find_bracket, Advance, CharCode, CommentSkipper, ErrorSite,
    Scanner, SourceText, StartAction, TextCursor,
};
use tracing::{debug, trace};

use crate::char_class::parse_char_class;
use crate::literal::parse_literal;
use crate::stack::ensure_sufficient_stack;
use crate::{
    Item, ItemError, ItemFlags, ItemKind, Rule, RuleError, RuleGrammarError, RuleId, SymbolTable,
};

/// Parser for one rule, or for one group nested inside it.
pub struct RuleParser<'g, C: CharCode> {
    rule: RuleId,
    symbols: &'g SymbolTable,
    comments: Option<&'g CommentSkipper<C>>,
    /// Group nesting level; 0 for the rule itself.
    depth: usize,
    items: Vec<Item<C>>,
    /// Index of the item modifiers apply to.
    current: Option<usize>,
    /// Nonterminal name and the site of its opening quote; bound in the
    /// symbol table only once the whole rule has parsed.
    binding: Option<(String, ErrorSite)>,
}

impl<'g, C: CharCode> RuleParser<'g, C> {
    pub fn new(rule: RuleId, symbols: &'g SymbolTable) -> Self {
        RuleParser {
            rule,
            symbols,
            comments: None,
            depth: 0,
            items: Vec::new(),
            current: None,
            binding: None,
        }
    }

    /// Skip these comments between items.
    #[must_use]
    pub fn with_comments(mut self, comments: &'g CommentSkipper<C>) -> Self {
        self.comments = comments.is_enabled().then_some(comments);
        self
    }

    /// Parse the rule text under the cursor, up to the end of input.
    ///
    /// A nonterminal is bound in the symbol table only if the rule parses,
    /// so a rejected rule leaves the table untouched.
    pub fn parse(mut self, cursor: &mut TextCursor<'_, C>) -> Result<Rule<C>, RuleError> {
        let rule = self.rule;
        debug!(%rule, "parse rule");
        begin_scanning(&mut self, cursor, C::EOF).map_err(|error| {
            debug!(%rule, %error, "rule rejected");
            RuleError::new(rule, error)
        })?;

        if let Some((name, opener)) = self.binding.take() {
            self.symbols.define(&name, rule).map_err(|error| RuleError {
                rule,
                kind: error.into(),
                site: opener,
            })?;
            debug!(%rule, %name, "nonterminal");
        }
        Ok(Rule::new(rule, self.items.into_iter().collect()))
    }

    fn nested(&self) -> Self {
        RuleParser {
            rule: self.rule,
            symbols: self.symbols,
            comments: self.comments,
            depth: self.depth + 1,
            items: Vec::new(),
            current: None,
            binding: None,
        }
    }

    fn parse_body(mut self, cursor: &mut TextCursor<'_, C>) -> Result<Vec<Item<C>>, ItemError> {
        begin_scanning(&mut self, cursor, C::EOF)?;
        Ok(self.items)
    }

    fn is_nonterminal(&self) -> bool {
        self.items.first().is_some_and(Item::is_nonterminal)
    }

    fn push(&mut self, item: Item<C>) {
        trace!(depth = self.depth, kind = item_kind_name(&item.kind), "item");
        self.items.push(item);
        self.current = Some(self.items.len() - 1);
    }

    fn current_item(
        &mut self,
        modifier: char,
        cursor: &TextCursor<'_, C>,
    ) -> Result<&mut Item<C>, ItemError> {
        match self.current {
            Some(index) => Ok(&mut self.items[index]),
            None => Err(ItemError::at(
                RuleGrammarError::NoCurrentItem { modifier },
                cursor,
            )),
        }
    }

    fn set_repetition(
        &mut self,
        flag: ItemFlags,
        modifier: char,
        cursor: &mut TextCursor<'_, C>,
    ) -> Result<(), ItemError> {
        let item = self.current_item(modifier, cursor)?;
        if item.flags.has_repetition() {
            return Err(ItemError::at(RuleGrammarError::DuplicateRepetition, cursor));
        }
        if flag == ItemFlags::FIXED_COUNT {
            item.count = Some(parse_count(cursor)?);
        }
        item.flags |= flag;
        trace!(?flag, count = item.count, "repetition");
        Ok(())
    }

    fn set_role(
        &mut self,
        flag: ItemFlags,
        modifier: char,
        cursor: &TextCursor<'_, C>,
    ) -> Result<(), ItemError> {
        let item = self.current_item(modifier, cursor)?;
        item.flags |= flag;
        trace!(?flag, "role");
        Ok(())
    }

    fn parse_nonterminal(&mut self, cursor: &mut TextCursor<'_, C>) -> Result<(), ItemError> {
        if self.depth > 0 || !self.items.is_empty() {
            return Err(ItemError::at(
                RuleGrammarError::NonterminalCoexistence,
                cursor,
            ));
        }
        let opener = cursor.snapshot();
        let codes = decode_string(cursor, C::from_ascii(b'\''))?;
        if codes.is_empty() {
            return Err(ItemError::at(RuleGrammarError::EmptyNonterminal, cursor));
        }
        let name = C::render(&codes);
        self.binding = Some((name.clone(), opener));
        self.push(Item::nonterminal(name));
        Ok(())
    }

    fn parse_group(&self, cursor: &mut TextCursor<'_, C>) -> Result<Item<C>, ItemError> {
        let mut probe = cursor.clone();
        let close = find_bracket(C::from_ascii(b'('), C::from_ascii(b')'), &mut probe)?;
        let mut body = cursor.fork(1, close - cursor.position())?;

        let nested = self.nested();
        let children = ensure_sufficient_stack(|| nested.parse_body(&mut body))?;
        *cursor = probe;
        Ok(Item::new(ItemKind::Group(children)))
    }
}

impl<C: CharCode> Scanner<C> for RuleParser<'_, C> {
    type Error = ItemError;

    fn advance_mode(&self) -> Advance {
        Advance::Clean
    }

    fn comments(&self) -> Option<&CommentSkipper<C>> {
        self.comments
    }

    fn on_start(&mut self, cursor: &mut TextCursor<'_, C>) -> Result<StartAction, ItemError> {
        // Forked group bodies start on their first character, layout or not.
        if cursor.current_char(0).is_layout() {
            cursor.clean_char();
        }
        Ok(StartAction::Stay)
    }

    fn process_char(&mut self, c: C, cursor: &mut TextCursor<'_, C>) -> Result<(), ItemError> {
        if self.is_nonterminal() {
            return Err(ItemError::at(
                RuleGrammarError::NonterminalCoexistence,
                cursor,
            ));
        }

        match u8::try_from(c.to_u32()) {
            Ok(b'\'') => self.parse_nonterminal(cursor),
            Ok(b'"') => {
                let codes = parse_literal(cursor)?;
                self.push(Item::new(ItemKind::Literal(codes)));
                Ok(())
            }
            Ok(b'[') => {
                let set = parse_char_class(cursor)?;
                self.push(Item::new(ItemKind::CharClass(set)));
                Ok(())
            }
            Ok(b'(') => {
                let group = self.parse_group(cursor)?;
                self.push(group);
                Ok(())
            }
            Ok(b'*') => self.set_repetition(ItemFlags::STAR, '*', cursor),
            Ok(b'+') => self.set_repetition(ItemFlags::PLUS, '+', cursor),
            Ok(b'?') => self.set_repetition(ItemFlags::QUESTION, '?', cursor),
            Ok(b'{') => self.set_repetition(ItemFlags::FIXED_COUNT, '{', cursor),
            Ok(b'p') => self.set_role(ItemFlags::PREFIX, 'p', cursor),
            Ok(b'r') => self.set_role(ItemFlags::REVERSE, 'r', cursor),
            _ => Err(ItemError::at(
                RuleGrammarError::UnrecognizedChar { found: c.to_u32() },
                cursor,
            )),
        }
    }

    fn on_end(&mut self, cursor: &mut TextCursor<'_, C>) -> Result<(), ItemError> {
        if self.items.is_empty() {
            let error = if self.depth > 0 {
                RuleGrammarError::EmptyGroup
            } else {
                RuleGrammarError::EmptyRule
            };
            return Err(ItemError::at(error, cursor));
        }
        Ok(())
    }
}

/// Read the `{n}` count whose `{` is under the cursor, leaving the cursor
/// on `}`.
fn parse_count<C: CharCode>(cursor: &mut TextCursor<'_, C>) -> Result<u32, ItemError> {
    let mut count: Option<u32> = None;
    loop {
        let c = cursor.raw_char();
        if c.is_eof() {
            return Err(ItemError::at(RuleGrammarError::UnterminatedCount, cursor));
        }
        if c.is(b'}') {
            break;
        }
        let digit = char::from_u32(c.to_u32())
            .and_then(|ch| ch.to_digit(10))
            .ok_or_else(|| ItemError::at(RuleGrammarError::ExpectedCount, cursor))?;
        let next = count
            .unwrap_or(0)
            .checked_mul(10)
            .and_then(|n| n.checked_add(digit))
            .ok_or_else(|| ItemError::at(RuleGrammarError::CountOverflow, cursor))?;
        count = Some(next);
    }

    match count {
        None => Err(ItemError::at(RuleGrammarError::ExpectedCount, cursor)),
        Some(0) => Err(ItemError::at(RuleGrammarError::ZeroCount, cursor)),
        Some(n) => Ok(n),
    }
}

fn item_kind_name<C: CharCode>(kind: &ItemKind<C>) -> &'static str {
    match kind {
        ItemKind::Literal(_) => "literal",
        ItemKind::CharClass(_) => "char class",
        ItemKind::Group(_) => "group",
        ItemKind::Nonterminal(_) => "nonterminal",
    }
}

/// Parse `text` as rule `rule`, binding any nonterminal in `symbols`.
pub fn parse_rule<C: CharCode>(
    rule: RuleId,
    text: &str,
    symbols: &SymbolTable,
) -> Result<Rule<C>, RuleError> {
    let source = SourceText::<C>::new(text);
    RuleParser::new(rule, symbols).parse(&mut source.cursor())
}
