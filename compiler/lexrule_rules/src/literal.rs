//! `"..."` literals.

use lexrule_core::{decode_string, CharCode, TextCursor};
use tracing::trace;

use crate::{ItemError, LiteralError};

/// Decode the literal opening at the cursor.
///
/// The cursor must sit on `"`; it is left on the closing quote.
pub fn parse_literal<C: CharCode>(cursor: &mut TextCursor<'_, C>) -> Result<Vec<C>, ItemError> {
    let codes = decode_string(cursor, C::from_ascii(b'"'))?;
    if codes.is_empty() {
        return Err(ItemError::at(LiteralError::Empty, cursor));
    }
    trace!(len = codes.len(), "literal");
    Ok(codes)
}

#[cfg(test)]
mod tests;
