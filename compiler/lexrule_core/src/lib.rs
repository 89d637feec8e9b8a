//! Text-position engine and cooperative scanners for the lexrule engine.
//!
//! The crate is generic over the width of a character code ([`CharCode`]),
//! so the same cursor and scanners run over bytes, UTF-16 units, 32-bit
//! codes or Rust `char`s.
//!
//! # Layers
//!
//! - [`SourceText`] owns an encoded buffer and hands out [`TextCursor`]s.
//! - [`TextCursor`] tracks [`Location`], the current line and the trailing
//!   run of tabs/spaces, with raw and layout-skipping ("clean") advancement.
//! - [`scan`] drives a [`Scanner`] char by char: [`StringToCodes`],
//!   [`CommentSkipper`] and [`find_bracket`] are built on it, and the rule
//!   parser in `lexrule_rules` is too.
//!
//! Every failure is a [`ScanError`] carrying an [`ErrorSite`] snapshot that
//! `lexrule_diagnostic` turns into a caret excerpt.

mod bracket;
mod char_code;
mod comments;
mod cursor;
mod error;
mod escape;
mod location;
pub mod scan;
mod source_text;
mod string_codes;

pub use bracket::find_bracket;
pub use char_code::CharCode;
pub use comments::{CommentDelimiters, CommentSkipper};
pub use cursor::{Advance, TextCursor};
pub use error::{
    render_code, BracketError, CommentError, CursorError, ErrorSite, EscapeError, ScanError,
    ScanErrorKind, StringError,
};
pub use escape::{decode_escape, EscapePair};
pub use location::Location;
pub use scan::{begin_scanning, ScanState, Scanner, StartAction};
pub use source_text::SourceText;
pub use string_codes::{decode_string, StringToCodes};
