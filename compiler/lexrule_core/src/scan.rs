//! Cooperative char-by-char scan protocol.
//!
//! A [`Scanner`] only decides what to do with each character; the driver
//! [`begin_scanning`] owns the loop:
//!
//! ```text
//! NotStarted ── force first advance, on_start, optional skip ──▶ Scanning
//! Scanning   ── skip comments, stop at `end`, process_char, advance ──▶ Scanning
//! Scanning   ── on_end ──▶ Done
//! ```
//!
//! Hitting EOF while waiting for a non-EOF `end` fails with the scanner's
//! [`unexpected_eof`](Scanner::unexpected_eof) error.

use tracing::trace;

use crate::{Advance, CharCode, CommentSkipper, CursorError, ScanError, TextCursor};

/// Lifecycle of one scan, reported through tracing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScanState {
    NotStarted,
    Scanning,
    Done,
}

/// What the driver does right after [`Scanner::on_start`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum StartAction {
    /// Process the current character.
    #[default]
    Stay,
    /// Advance past the current character first (e.g. an opening quote).
    SkipFirst,
}

/// Per-scanner hooks for [`begin_scanning`].
pub trait Scanner<C: CharCode> {
    type Error: From<ScanError>;

    /// How the driver moves between characters.
    fn advance_mode(&self) -> Advance {
        Advance::Raw
    }

    /// Comments to skip before each character.
    fn comments(&self) -> Option<&CommentSkipper<C>> {
        None
    }

    fn on_start(&mut self, _cursor: &mut TextCursor<'_, C>) -> Result<StartAction, Self::Error> {
        Ok(StartAction::Stay)
    }

    /// Handle the current character `c`.
    ///
    /// Must not move past `c`, except to consume a multi-character construct
    /// starting at `c`; the cursor is then left on that construct's last
    /// character and the driver advances past it.
    fn process_char(&mut self, c: C, cursor: &mut TextCursor<'_, C>) -> Result<(), Self::Error>;

    fn on_end(&mut self, _cursor: &mut TextCursor<'_, C>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Error for reaching EOF before the end symbol.
    fn unexpected_eof(&self, cursor: &TextCursor<'_, C>) -> Self::Error {
        ScanError::at(CursorError::UnexpectedEof, cursor).into()
    }
}

/// Drive `scanner` over `cursor` until the current character is `end`.
///
/// The cursor is left on `end` (or EOF when `end` is the EOF sentinel).
pub fn begin_scanning<C, S>(
    scanner: &mut S,
    cursor: &mut TextCursor<'_, C>,
    end: C,
) -> Result<(), S::Error>
where
    C: CharCode,
    S: Scanner<C> + ?Sized,
{
    let mode = scanner.advance_mode();
    trace!(state = ?ScanState::NotStarted, ?mode, end = end.to_u32(), "scan");

    if !cursor.is_started() {
        cursor.advance(mode);
    }
    if scanner.on_start(cursor)? == StartAction::SkipFirst {
        cursor.advance(mode);
    }
    trace!(state = ?ScanState::Scanning, offset = cursor.location().offset, "scan");

    loop {
        if let Some(comments) = scanner.comments() {
            while comments.skip_if_present(cursor)? {
                if mode == Advance::Clean && cursor.current_char(0).is_layout() {
                    cursor.clean_char();
                }
            }
        }

        let c = cursor.current_char(0);
        if c == end {
            break;
        }
        if c.is_eof() {
            return Err(scanner.unexpected_eof(cursor));
        }
        scanner.process_char(c, cursor)?;
        cursor.advance(mode);
    }

    trace!(state = ?ScanState::Done, offset = cursor.location().offset, "scan");
    scanner.on_end(cursor)
}

#[cfg(test)]
mod tests;
