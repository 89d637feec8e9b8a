//! Matching-bracket search.

use tracing::trace;

use crate::{BracketError, CharCode, ScanError, TextCursor};

/// Find the bracket that closes the `open` at the cursor.
///
/// The cursor must sit on `open` (an unstarted cursor is advanced onto its
/// first character). Nested `open`/`close` pairs are balanced; no quoting
/// or escaping is recognized. On success the cursor is left on the matching
/// `close` and its view position is returned.
///
/// # Errors
///
/// [`BracketError::MissingOpen`] if the cursor is not on `open`, and
/// [`BracketError::UnexpectedEof`], located at the last character, if the
/// input ends first.
pub fn find_bracket<C: CharCode>(
    open: C,
    close: C,
    cursor: &mut TextCursor<'_, C>,
) -> Result<usize, ScanError> {
    if !cursor.is_started() {
        cursor.raw_char();
    }
    if cursor.current_char(0) != open {
        return Err(ScanError::at(
            BracketError::MissingOpen {
                open: open.to_u32(),
            },
            cursor,
        ));
    }

    let mut depth = 1usize;
    loop {
        if cursor.current_char(1).is_eof() {
            return Err(ScanError::at(
                BracketError::UnexpectedEof {
                    open: open.to_u32(),
                },
                cursor,
            ));
        }
        let c = cursor.raw_char();
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                trace!(position = cursor.position(), "bracket closed");
                return Ok(cursor.position());
            }
        }
    }
}
