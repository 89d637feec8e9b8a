//! Rendered diagnostics.

use std::fmt;

use lexrule_core::{ErrorSite, Location, ScanError};

use crate::{reduce_excerpt, ErrorCode, Excerpt};

/// A located error with its reduced excerpt.
///
/// `Display` gives the plain form:
///
/// ```text
/// unterminated string, expected closing `"` File: <input>, line: 1, char: 5
/// "abc
///     ^
/// ```
///
/// [`render_with_code`](Self::render_with_code) prefixes it with
/// `error[E0109]: `.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    pub message: String,
    pub location: Location,
    pub excerpt: Excerpt,
}

impl Diagnostic {
    /// Build a diagnostic for an error at `site`.
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, site: &ErrorSite) -> Self {
        Diagnostic {
            code,
            message: message.into(),
            location: site.location.clone(),
            excerpt: reduce_excerpt(site),
        }
    }

    pub fn from_scan_error(error: &ScanError) -> Self {
        Self::new(
            ErrorCode::for_scan(&error.kind),
            error.kind.to_string(),
            &error.site,
        )
    }

    /// The rendered diagnostic behind an `error[CODE]: ` header.
    pub fn render_with_code(&self) -> String {
        format!("error[{}]: {self}", self.code)
    }
}

impl From<&ScanError> for Diagnostic {
    fn from(error: &ScanError) -> Self {
        Self::from_scan_error(error)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} File: {}, line: {}, char: {}\n{}\n{}",
            self.message,
            self.location.filename,
            self.location.line,
            self.location.column,
            self.excerpt.text,
            self.excerpt.caret_line(),
        )
    }
}
