//! Diagnostics for the lexrule engine.
//!
//! Every scan and rule error carries an [`ErrorSite`](lexrule_core::ErrorSite)
//! snapshot. This crate turns one into a [`Diagnostic`]:
//! - an [`ErrorCode`] for searchability (`lexrulec explain E0202`)
//! - the message and location
//! - a reduced single-line [`Excerpt`] with a caret under the failing
//!   character
//!
//! ```text
//! empty character class File: <input>, line: 1, char: 2
//! []
//!  ^
//! ```

mod diagnostic;
mod error_code;
mod excerpt;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use excerpt::{reduce_excerpt, Excerpt, EXCERPT_RADIUS};
