//! `[...]` character classes.
//!
//! Inside a class:
//! - `a-z` is an inclusive range between two members; a `-` first, last or
//!   right after a range is a plain member
//! - `\` starts an escape (`\]`, `\[`, `\-` and `\^` included)
//! - `[[` and `]]` are literal brackets; a single `]` closes the class and
//!   a single `[` is an error

use lexrule_core::{decode_escape, CharCode, EscapePair, TextCursor};
use tracing::trace;

use crate::{CharClassError, CharSet, ItemError};

/// One step through the class body.
enum Step<C> {
    Member(C),
    Close,
}

fn class_escapes<C: CharCode>() -> [EscapePair<C>; 4] {
    [b'[', b']', b'-', b'^'].map(|b| (C::from_ascii(b), C::from_ascii(b)))
}

/// Whether the character after the cursor ends the class.
fn closes_next<C: CharCode>(cursor: &TextCursor<'_, C>) -> bool {
    cursor.current_char(1).is(b']') && !cursor.current_char(2).is(b']')
}

/// Interpret `c`, the current character, consuming any escape or doubled
/// bracket it starts.
fn step<C: CharCode>(
    c: C,
    cursor: &mut TextCursor<'_, C>,
    escapes: &[EscapePair<C>],
) -> Result<Step<C>, ItemError> {
    if c.is_eof() {
        return Err(ItemError::at(CharClassError::Unterminated, cursor));
    }
    if c.is(b']') {
        if cursor.current_char(1).is(b']') {
            cursor.raw_char();
            return Ok(Step::Member(c));
        }
        return Ok(Step::Close);
    }
    if c.is(b'[') {
        if cursor.current_char(1).is(b'[') {
            cursor.raw_char();
            return Ok(Step::Member(c));
        }
        return Err(ItemError::at(CharClassError::NestedOpen, cursor));
    }
    if c.is(b'\\') {
        cursor.raw_char();
        return Ok(Step::Member(decode_escape(cursor, escapes)?));
    }
    Ok(Step::Member(c))
}

/// Parse the class opening at the cursor into its member set.
///
/// The cursor must sit on `[`; it is left on the closing `]`.
pub fn parse_char_class<C: CharCode>(cursor: &mut TextCursor<'_, C>) -> Result<CharSet, ItemError> {
    let escapes = class_escapes::<C>();
    let mut set = CharSet::new();
    let mut range_start: Option<C> = None;

    loop {
        let c = cursor.raw_char();

        let range = c.is(b'-')
            && !cursor.current_char(1).is_eof()
            && !closes_next(cursor);
        if let Some(start) = range_start.filter(|_| range) {
            range_start = None;
            let next = cursor.raw_char();
            let Step::Member(end) = step(next, cursor, &escapes)? else {
                return Err(ItemError::at(CharClassError::Unterminated, cursor));
            };
            if start > end {
                return Err(ItemError::at(
                    CharClassError::DescendingRange {
                        start: start.to_u32(),
                        end: end.to_u32(),
                    },
                    cursor,
                ));
            }
            set.insert_range(start.to_u32(), end.to_u32());
            continue;
        }

        match step(c, cursor, &escapes)? {
            Step::Member(member) => {
                set.insert(member.to_u32());
                range_start = Some(member);
            }
            Step::Close => break,
        }
    }

    if set.is_empty() {
        return Err(ItemError::at(CharClassError::Empty, cursor));
    }
    trace!(members = set.len(), "char class");
    Ok(set)
}
