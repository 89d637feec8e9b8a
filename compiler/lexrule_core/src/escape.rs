//! Escape sequence decoding.
//!
//! Decodes the part of an escape after the backslash into one character
//! code. Recognized escapes:
//!
//! - fixed: `\\` `\'` `\"` `\t` `\n` `\r` `\f` `\b` `\a` `\v`
//! - octal: `\0` followed by up to 2 octal digits
//! - hex: `\x` followed by up to 2 hex digits, `\u` by up to 4
//! - caller-supplied `(trigger, replacement)` pairs
//!
//! Numeric escapes stop at the first non-digit, so `\0555` is `\055`
//! followed by a literal `5`, and `\x` with no digits is code `0`.

use tracing::trace;

use crate::{CharCode, EscapeError, ScanError, TextCursor};

/// An extra escape accepted by one caller: `\trigger` decodes to
/// `replacement`.
pub type EscapePair<C> = (C, C);

/// Resolve a fixed single-character escape.
#[inline]
fn resolve_fixed(trigger: u32) -> Option<u8> {
    let c = char::from_u32(trigger)?;
    let code = match c {
        '\\' => b'\\',
        '\'' => b'\'',
        '"' => b'"',
        't' => b'\t',
        'n' => b'\n',
        'r' => b'\r',
        'f' => 0x0C,
        'b' => 0x08,
        'a' => 0x07,
        'v' => 0x0B,
        _ => return None,
    };
    Some(code)
}

/// Radix and maximum digit count of a numeric escape.
#[inline]
fn numeric_form(trigger: u32) -> Option<(u32, usize)> {
    match char::from_u32(trigger)? {
        '0' => Some((8, 2)),
        'x' => Some((16, 2)),
        'u' => Some((16, 4)),
        _ => None,
    }
}

/// Decode one escape.
///
/// The cursor must sit on the character right after the backslash. On
/// success it is left on the last character of the escape, so the caller's
/// next advance moves past it.
pub fn decode_escape<C: CharCode>(
    cursor: &mut TextCursor<'_, C>,
    extra: &[EscapePair<C>],
) -> Result<C, ScanError> {
    let trigger = cursor.current_char(0);
    if trigger.is_eof() {
        return Err(ScanError::at(EscapeError::UnexpectedEof, cursor));
    }
    let trigger_code = trigger.to_u32();

    if let Some(code) = resolve_fixed(trigger_code) {
        trace!(trigger = trigger_code, code, "fixed escape");
        return Ok(C::from_ascii(code));
    }

    if let Some((radix, max_digits)) = numeric_form(trigger_code) {
        let mut value: u32 = 0;
        for _ in 0..max_digits {
            let next = cursor.current_char(1);
            let Some(digit) = char::from_u32(next.to_u32()).and_then(|c| c.to_digit(radix)) else {
                break;
            };
            value = value * radix + digit;
            cursor.raw_char();
        }
        trace!(trigger = trigger_code, value, "numeric escape");
        return C::from_u32(value).ok_or_else(|| {
            ScanError::at(
                EscapeError::OutOfRange {
                    value,
                    bits: C::BITS,
                },
                cursor,
            )
        });
    }

    if let Some(&(_, replacement)) = extra.iter().find(|(t, _)| *t == trigger) {
        trace!(trigger = trigger_code, "caller escape");
        return Ok(replacement);
    }

    Err(ScanError::at(
        EscapeError::NoMatch {
            trigger: trigger_code,
        },
        cursor,
    ))
}

#[cfg(test)]
mod tests;
