//! Scan error types.
//!
//! Errors follow the WHERE+WHAT shape used across the engine:
//! - WHERE: an [`ErrorSite`] snapshot of the cursor that failed
//! - WHAT: a [`ScanErrorKind`] naming the failing component and reason
//!
//! All failures are local and final: the scan that produced one is
//! abandoned, nothing is retried.

use thiserror::Error;

use crate::{CharCode, Location, TextCursor};

/// Snapshot of a cursor at the point of failure.
///
/// Holds everything diagnostics need, rendered to text, so the error
/// outlives the source buffer and crosses threads freely.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ErrorSite {
    pub location: Location,
    /// The full source line containing the failing character.
    pub line: String,
    /// Character index of the failing character within `line`.
    pub index: usize,
    /// Tabs/spaces immediately preceding the failing character.
    pub trailing_layout: String,
}

/// Misuse of the cursor itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum CursorError {
    #[error("fork range {from}..{to} is inverted")]
    InvertedFork { from: usize, to: usize },
    #[error("fork range {from}..{to} exceeds the {remaining} remaining characters")]
    ForkOutOfBounds {
        from: usize,
        to: usize,
        remaining: usize,
    },
    #[error("unexpected end of input")]
    UnexpectedEof,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum EscapeError {
    #[error("unexpected end of input in escape sequence")]
    UnexpectedEof,
    #[error("no escape sequence matches `\\{}`", render_code(.trigger))]
    NoMatch { trigger: u32 },
    #[error("escape value {value:#x} does not fit a {bits}-bit character")]
    OutOfRange { value: u32, bits: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum CommentError {
    #[error("unterminated comment, expected `{close}`")]
    Unterminated { close: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum BracketError {
    #[error("missing opening bracket `{}`", render_code(.open))]
    MissingOpen { open: u32 },
    #[error("unexpected end of input, `{}` is never closed", render_code(.open))]
    UnexpectedEof { open: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum StringError {
    #[error("not a string opener, expected `{}`", render_code(.quote))]
    NotAnOpener { quote: u32 },
    #[error("unterminated string, expected closing `{}`", render_code(.quote))]
    Unterminated { quote: u32 },
}

/// What went wrong, grouped by the component that failed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum ScanErrorKind {
    #[error(transparent)]
    Cursor(#[from] CursorError),
    #[error(transparent)]
    Escape(#[from] EscapeError),
    #[error(transparent)]
    Comment(#[from] CommentError),
    #[error(transparent)]
    Bracket(#[from] BracketError),
    #[error(transparent)]
    String(#[from] StringError),
}

/// A failed scan: what went wrong and where.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("{kind}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub site: ErrorSite,
}

impl ScanError {
    /// Build an error located at the cursor's current character.
    pub fn at<C: CharCode>(kind: impl Into<ScanErrorKind>, cursor: &TextCursor<'_, C>) -> Self {
        ScanError {
            kind: kind.into(),
            site: cursor.snapshot(),
        }
    }

    pub fn location(&self) -> &Location {
        &self.site.location
    }
}

/// Render a numeric code for a message.
#[allow(
    clippy::trivially_copy_pass_by_ref,
    reason = "called from thiserror format args, which bind fields by reference"
)]
pub fn render_code(code: &u32) -> String {
    let code = *code;
    match char::from_u32(code) {
        Some(c) if !c.is_control() => c.to_string(),
        _ => format!("\\u{{{code:x}}}"),
    }
}
