//! Rule parsing errors.
//!
//! Same WHERE+WHAT shape as scan errors: an [`ErrorSite`] plus a
//! [`RuleErrorKind`]. Item parsers return [`ItemError`]; the rule parser
//! attaches the rule id to produce a [`RuleError`].

use lexrule_core::{render_code, CharCode, ErrorSite, ScanError, ScanErrorKind, TextCursor};
use lexrule_diagnostic::{Diagnostic, ErrorCode};
use thiserror::Error;

use crate::RuleId;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum CharClassError {
    #[error("unterminated character class")]
    Unterminated,
    #[error("empty character class")]
    Empty,
    #[error(
        "range start must not exceed range end in `{}-{}`",
        render_code(.start),
        render_code(.end)
    )]
    DescendingRange { start: u32, end: u32 },
    #[error("`[` inside a character class must be doubled as `[[`")]
    NestedOpen,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum LiteralError {
    #[error("empty string literals are not allowed")]
    Empty,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum RuleGrammarError {
    #[error("unrecognized character `{}` in rule", render_code(.found))]
    UnrecognizedChar { found: u32 },
    #[error("item already has a repetition")]
    DuplicateRepetition,
    #[error("`{modifier}` has no item to apply to")]
    NoCurrentItem { modifier: char },
    #[error("nonterminal cannot coexist with other items")]
    NonterminalCoexistence,
    #[error("empty rule body is not allowed")]
    EmptyRule,
    #[error("empty group is not allowed")]
    EmptyGroup,
    #[error("nonterminal name must not be empty")]
    EmptyNonterminal,
    #[error("expected a repetition count")]
    ExpectedCount,
    #[error("unterminated repetition count")]
    UnterminatedCount,
    #[error("repetition count must be positive")]
    ZeroCount,
    #[error("repetition count is too large")]
    CountOverflow,
    #[error("nonterminal `{name}` already defined by rule {rule}")]
    DuplicateNonterminal { name: String, rule: RuleId },
    #[error("rule id {rule} is used more than once")]
    DuplicateRuleId { rule: RuleId },
}

/// What went wrong while parsing a rule.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum RuleErrorKind {
    #[error(transparent)]
    Scan(#[from] ScanErrorKind),
    #[error(transparent)]
    CharClass(#[from] CharClassError),
    #[error(transparent)]
    Literal(#[from] LiteralError),
    #[error(transparent)]
    Grammar(#[from] RuleGrammarError),
}

impl RuleErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            RuleErrorKind::Scan(kind) => ErrorCode::for_scan(kind),
            RuleErrorKind::CharClass(error) => match error {
                CharClassError::Unterminated => ErrorCode::E0201,
                CharClassError::Empty => ErrorCode::E0202,
                CharClassError::DescendingRange { .. } => ErrorCode::E0203,
                CharClassError::NestedOpen => ErrorCode::E0204,
            },
            RuleErrorKind::Literal(LiteralError::Empty) => ErrorCode::E0205,
            RuleErrorKind::Grammar(error) => match error {
                RuleGrammarError::UnrecognizedChar { .. } => ErrorCode::E0301,
                RuleGrammarError::DuplicateRepetition => ErrorCode::E0302,
                RuleGrammarError::NoCurrentItem { .. } => ErrorCode::E0303,
                RuleGrammarError::NonterminalCoexistence => ErrorCode::E0304,
                RuleGrammarError::EmptyRule => ErrorCode::E0305,
                RuleGrammarError::ExpectedCount
                | RuleGrammarError::UnterminatedCount
                | RuleGrammarError::ZeroCount
                | RuleGrammarError::CountOverflow => ErrorCode::E0306,
                RuleGrammarError::DuplicateNonterminal { .. } => ErrorCode::E0307,
                RuleGrammarError::DuplicateRuleId { .. } => ErrorCode::E0308,
                RuleGrammarError::EmptyNonterminal => ErrorCode::E0309,
                RuleGrammarError::EmptyGroup => ErrorCode::E0310,
            },
        }
    }
}

/// Failure of one item parser, before the rule id is known.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("{kind}")]
pub struct ItemError {
    pub kind: RuleErrorKind,
    pub site: ErrorSite,
}

impl ItemError {
    /// Build an error located at the cursor's current character.
    pub fn at<C: CharCode>(kind: impl Into<RuleErrorKind>, cursor: &TextCursor<'_, C>) -> Self {
        ItemError {
            kind: kind.into(),
            site: cursor.snapshot(),
        }
    }
}

impl From<ScanError> for ItemError {
    fn from(error: ScanError) -> Self {
        ItemError {
            kind: error.kind.into(),
            site: error.site,
        }
    }
}

/// A rule that failed to parse.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("rule {rule}: {kind}")]
pub struct RuleError {
    pub rule: RuleId,
    pub kind: RuleErrorKind,
    pub site: ErrorSite,
}

impl RuleError {
    pub fn new(rule: RuleId, error: ItemError) -> Self {
        RuleError {
            rule,
            kind: error.kind,
            site: error.site,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Convert to a rendered diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.code(), self.kind.to_string(), &self.site)
    }
}
