//! Error codes for all engine diagnostics.
//!
//! Each code is a unique identifier (e.g. `E0202`); the second digit names
//! the layer that failed. Used for `lexrulec explain` lookups.

use std::fmt;

use lexrule_core::{
    BracketError, CommentError, CursorError, EscapeError, ScanErrorKind, StringError,
};

/// Error codes for all engine diagnostics.
///
/// Format: E0### where the second digit indicates the layer:
/// - E01xx: cursor and scanner errors
/// - E02xx: character class and literal errors
/// - E03xx: rule grammar errors
/// - E04xx: matching and grammar file errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Scan Errors (E01xx)
    /// Fork range inverted or out of bounds
    E0101,
    /// Unexpected end of input
    E0102,
    /// No escape sequence matches
    E0103,
    /// Escape value does not fit the character width
    E0104,
    /// Unterminated block comment
    E0105,
    /// Missing opening bracket
    E0106,
    /// Unclosed bracket
    E0107,
    /// Not a string opener
    E0108,
    /// Unterminated string
    E0109,

    // Item Errors (E02xx)
    /// Unterminated character class
    E0201,
    /// Empty character class
    E0202,
    /// Descending character range
    E0203,
    /// Unescaped `[` inside a character class
    E0204,
    /// Empty string literal
    E0205,

    // Rule Errors (E03xx)
    /// Unrecognized character in rule
    E0301,
    /// Repetition applied twice
    E0302,
    /// Modifier with no preceding item
    E0303,
    /// Nonterminal combined with other items
    E0304,
    /// Empty rule body
    E0305,
    /// Malformed repetition count
    E0306,
    /// Nonterminal defined twice
    E0307,
    /// Rule id used twice
    E0308,
    /// Empty nonterminal name
    E0309,
    /// Empty group
    E0310,

    // Match Errors (E04xx)
    /// No rule matches the input
    E0401,
    /// Malformed grammar file line
    E0402,
}

impl ErrorCode {
    /// All error codes, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0101,
        ErrorCode::E0102,
        ErrorCode::E0103,
        ErrorCode::E0104,
        ErrorCode::E0105,
        ErrorCode::E0106,
        ErrorCode::E0107,
        ErrorCode::E0108,
        ErrorCode::E0109,
        ErrorCode::E0201,
        ErrorCode::E0202,
        ErrorCode::E0203,
        ErrorCode::E0204,
        ErrorCode::E0205,
        ErrorCode::E0301,
        ErrorCode::E0302,
        ErrorCode::E0303,
        ErrorCode::E0304,
        ErrorCode::E0305,
        ErrorCode::E0306,
        ErrorCode::E0307,
        ErrorCode::E0308,
        ErrorCode::E0309,
        ErrorCode::E0310,
        ErrorCode::E0401,
        ErrorCode::E0402,
    ];

    /// Get the code as a string (e.g., "E0202").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0101 => "E0101",
            ErrorCode::E0102 => "E0102",
            ErrorCode::E0103 => "E0103",
            ErrorCode::E0104 => "E0104",
            ErrorCode::E0105 => "E0105",
            ErrorCode::E0106 => "E0106",
            ErrorCode::E0107 => "E0107",
            ErrorCode::E0108 => "E0108",
            ErrorCode::E0109 => "E0109",
            ErrorCode::E0201 => "E0201",
            ErrorCode::E0202 => "E0202",
            ErrorCode::E0203 => "E0203",
            ErrorCode::E0204 => "E0204",
            ErrorCode::E0205 => "E0205",
            ErrorCode::E0301 => "E0301",
            ErrorCode::E0302 => "E0302",
            ErrorCode::E0303 => "E0303",
            ErrorCode::E0304 => "E0304",
            ErrorCode::E0305 => "E0305",
            ErrorCode::E0306 => "E0306",
            ErrorCode::E0307 => "E0307",
            ErrorCode::E0308 => "E0308",
            ErrorCode::E0309 => "E0309",
            ErrorCode::E0310 => "E0310",
            ErrorCode::E0401 => "E0401",
            ErrorCode::E0402 => "E0402",
        }
    }

    /// One-line explanation, shown by `lexrulec explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0101 => "a sub-scan was requested over a range outside the text",
            ErrorCode::E0102 => "the input ended before the construct being scanned was complete",
            ErrorCode::E0103 => {
                "a backslash is followed by a character that starts no escape sequence"
            }
            ErrorCode::E0104 => "a numeric escape encodes a value too large for the character width",
            ErrorCode::E0105 => "a block comment is never closed",
            ErrorCode::E0106 => "a bracket search started on a character that is not the opener",
            ErrorCode::E0107 => "an opening bracket has no matching closing bracket",
            ErrorCode::E0108 => "a quoted literal was expected but the opening quote is missing",
            ErrorCode::E0109 => "a quoted literal is never closed",
            ErrorCode::E0201 => "a character class `[...]` is never closed",
            ErrorCode::E0202 => "a character class `[]` has no members",
            ErrorCode::E0203 => "a range `a-b` inside a character class has its start after its end",
            ErrorCode::E0204 => "`[` inside a character class must be doubled as `[[`",
            ErrorCode::E0205 => "a string literal `\"\"` must hold at least one character",
            ErrorCode::E0301 => "a rule contains a character that starts no item or modifier",
            ErrorCode::E0302 => "an item already carries a repetition (`*`, `+`, `?` or `{n}`)",
            ErrorCode::E0303 => "a modifier (`*`, `+`, `?`, `{n}`, `p`, `r`) has no item to apply to",
            ErrorCode::E0304 => "a nonterminal `'name'` must be the only item of its rule",
            ErrorCode::E0305 => "a rule must contain at least one item",
            ErrorCode::E0306 => "a repetition count `{n}` must be a positive decimal number",
            ErrorCode::E0307 => "two rules define the same nonterminal name",
            ErrorCode::E0308 => "two rules of one grammar share the same id",
            ErrorCode::E0309 => "a nonterminal `''` must have a name",
            ErrorCode::E0310 => "a group `()` must hold at least one item",
            ErrorCode::E0401 => "no rule of the grammar matches the input at this character",
            ErrorCode::E0402 => "a grammar file line must be a rule id followed by the rule text",
        }
    }

    /// Code for a failure of the scan layer.
    pub fn for_scan(kind: &ScanErrorKind) -> Self {
        match kind {
            ScanErrorKind::Cursor(
                CursorError::InvertedFork { .. } | CursorError::ForkOutOfBounds { .. },
            ) => ErrorCode::E0101,
            ScanErrorKind::Cursor(CursorError::UnexpectedEof)
            | ScanErrorKind::Escape(EscapeError::UnexpectedEof) => ErrorCode::E0102,
            ScanErrorKind::Escape(EscapeError::NoMatch { .. }) => ErrorCode::E0103,
            ScanErrorKind::Escape(EscapeError::OutOfRange { .. }) => ErrorCode::E0104,
            ScanErrorKind::Comment(CommentError::Unterminated { .. }) => ErrorCode::E0105,
            ScanErrorKind::Bracket(BracketError::MissingOpen { .. }) => ErrorCode::E0106,
            ScanErrorKind::Bracket(BracketError::UnexpectedEof { .. }) => ErrorCode::E0107,
            ScanErrorKind::String(StringError::NotAnOpener { .. }) => ErrorCode::E0108,
            ScanErrorKind::String(StringError::Unterminated { .. }) => ErrorCode::E0109,
        }
    }

    pub fn is_scan_error(&self) -> bool {
        self.as_str().starts_with("E01")
    }

    pub fn is_item_error(&self) -> bool {
        self.as_str().starts_with("E02")
    }

    pub fn is_rule_error(&self) -> bool {
        self.as_str().starts_with("E03")
    }

    pub fn is_match_error(&self) -> bool {
        self.as_str().starts_with("E04")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E0202"`, case-insensitively.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
