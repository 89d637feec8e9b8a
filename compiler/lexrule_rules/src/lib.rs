//! Rule DSL for the lexrule engine.
//!
//! A rule string such as `"for"p+[a-zA-Z_]*` is parsed into a tree of
//! [`Item`]s, each carrying [`ItemFlags`]. Rules are parsed by
//! [`RuleParser`], a scanner in the cooperative protocol of
//! `lexrule_core`, and a whole grammar is assembled by [`GrammarBuilder`]
//! around one shared [`SymbolTable`].
//!
//! ```text
//! "for"p+[a-zA-Z_]*
//! ├── Literal "for"        PLUS | PREFIX
//! └── CharClass [A-Z_a-z]  STAR
//! ```
//!
//! Parsed rules match text through [`Rule::try_match`]; [`Grammar::longest_match`]
//! picks between rules, and [`tokenize`] splits a whole text with it.

mod char_class;
mod charset;
mod error;
mod flags;
mod grammar;
mod item;
mod literal;
mod matching;
mod parser;
mod rule;
mod stack;
mod symbols;
mod tokenize;

pub use char_class::parse_char_class;
pub use charset::CharSet;
pub use error::{
    CharClassError, ItemError, LiteralError, RuleError, RuleErrorKind, RuleGrammarError,
};
pub use flags::ItemFlags;
pub use grammar::{Grammar, GrammarBuilder, GrammarConfig};
pub use item::{Item, ItemKind};
pub use literal::parse_literal;
pub use matching::Match;
pub use parser::{parse_rule, RuleParser};
pub use rule::{Rule, RuleId, RuleItems};
pub use stack::ensure_sufficient_stack;
pub use symbols::SymbolTable;
pub use tokenize::{tokenize, Token};
