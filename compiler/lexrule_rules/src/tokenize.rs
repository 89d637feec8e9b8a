//! Longest-match tokenizing of an input text.

use std::fmt;

use lexrule_core::{Advance, CharCode, SourceText};
use lexrule_diagnostic::{Diagnostic, ErrorCode};
use tracing::trace;

use crate::{Grammar, RuleId};

/// One matched token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub line: u64,
    pub column: u64,
    pub rule: RuleId,
    /// Length in characters.
    pub len: usize,
    pub text: String,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} {} {}",
            self.line,
            self.column,
            self.rule,
            self.len,
            self.text.escape_debug()
        )
    }
}

/// Split `source` into tokens, skipping layout between them.
///
/// Stops at the first character no rule matches and reports it.
pub fn tokenize<C: CharCode>(
    grammar: &Grammar<C>,
    source: &SourceText<C>,
) -> Result<Vec<Token>, Diagnostic> {
    let mut cursor = source.cursor();
    let mut tokens = Vec::new();
    let mut c = cursor.raw_char();

    while !c.is_eof() {
        if let Some(found) = grammar.longest_match(&cursor) {
            let location = cursor.location();
            let token = Token {
                line: location.line,
                column: location.column,
                rule: found.rule,
                len: found.len,
                text: C::render(&cursor.rest_of_text()[..found.len]),
            };
            trace!(rule = %token.rule, len = token.len, "token");
            tokens.push(token);
            c = cursor.skip(found.len, Advance::Raw);
        } else if c.is_layout() {
            c = cursor.raw_char();
        } else {
            return Err(Diagnostic::new(
                ErrorCode::E0401,
                format!("no rule matches `{}`", C::render(&[c])),
                &cursor.snapshot(),
            ));
        }
    }

    Ok(tokens)
}
