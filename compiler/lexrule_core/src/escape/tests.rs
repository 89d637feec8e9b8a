use pretty_assertions::assert_eq;

use super::decode_escape;
use crate::{EscapeError, ScanErrorKind, SourceText, TextCursor};

/// Cursor over `text`, positioned on its first character.
fn on_trigger(text: &SourceText<u8>) -> TextCursor<'_, u8> {
    let mut cursor = text.cursor();
    cursor.raw_char();
    cursor
}

fn decode(escape: &str) -> Result<u8, ScanErrorKind> {
    let text = SourceText::<u8>::new(escape);
    let mut cursor = on_trigger(&text);
    decode_escape(&mut cursor, &[]).map_err(|e| e.kind)
}

// === Fixed escapes ===

#[test]
fn fixed_escapes_resolve() {
    assert_eq!(decode("n"), Ok(b'\n'));
    assert_eq!(decode("t"), Ok(b'\t'));
    assert_eq!(decode("r"), Ok(b'\r'));
    assert_eq!(decode("f"), Ok(0x0C));
    assert_eq!(decode("b"), Ok(0x08));
    assert_eq!(decode("a"), Ok(0x07));
    assert_eq!(decode("v"), Ok(0x0B));
    assert_eq!(decode("\\"), Ok(b'\\'));
    assert_eq!(decode("'"), Ok(b'\''));
    assert_eq!(decode("\""), Ok(b'"'));
}

#[test]
fn fixed_escape_consumes_one_character() {
    let text = SourceText::<u8>::new("nX");
    let mut cursor = on_trigger(&text);
    assert_eq!(decode_escape(&mut cursor, &[]).ok(), Some(b'\n'));
    assert_eq!(cursor.current_char(0), b'n');
    assert_eq!(cursor.current_char(1), b'X');
}

// === Numeric escapes ===

#[test]
fn octal_takes_at_most_two_digits() {
    let text = SourceText::<u8>::new("0555");
    let mut cursor = on_trigger(&text);
    assert_eq!(decode_escape(&mut cursor, &[]).ok(), Some(0o55));
    // Left on the last consumed digit; the third `5` is not part of it.
    assert_eq!(cursor.position(), 2);
    assert_eq!(cursor.current_char(1), b'5');
}

#[test]
fn octal_stops_at_non_digit() {
    assert_eq!(decode("08"), Ok(0));
    assert_eq!(decode("07x"), Ok(7));
    assert_eq!(decode("077"), Ok(0o77));
}

#[test]
fn zero_digits_yield_zero() {
    assert_eq!(decode("0 "), Ok(0));
    assert_eq!(decode("x"), Ok(0));
    assert_eq!(decode("xg"), Ok(0));
}

#[test]
fn hex_escapes() {
    assert_eq!(decode("xFF"), Ok(0xFF));
    assert_eq!(decode("x41"), Ok(b'A'));
    assert_eq!(decode("x4"), Ok(4));
    assert_eq!(decode("x414"), Ok(b'A'));
    assert_eq!(decode("u0041"), Ok(b'A'));
}

#[test]
fn unicode_escape_in_wide_alphabet() {
    let text = SourceText::<char>::new("u043C!");
    let mut cursor = text.cursor();
    cursor.raw_char();
    assert_eq!(decode_escape(&mut cursor, &[]).ok(), Some('м'));
    assert_eq!(cursor.current_char(1), '!');
}

#[test]
fn value_too_wide_for_alphabet_is_an_error() {
    assert_eq!(
        decode("u0100"),
        Err(ScanErrorKind::Escape(EscapeError::OutOfRange {
            value: 0x100,
            bits: 8
        }))
    );
}

// === Caller pairs and failures ===

#[test]
fn caller_pairs_extend_the_table() {
    let text = SourceText::<u8>::new("]");
    let mut cursor = on_trigger(&text);
    let extra = [(b']', b']'), (b'-', b'-')];
    assert_eq!(decode_escape(&mut cursor, &extra).ok(), Some(b']'));
}

#[test]
fn unknown_escape_is_an_error() {
    assert_eq!(
        decode("q"),
        Err(ScanErrorKind::Escape(EscapeError::NoMatch {
            trigger: u32::from(b'q')
        }))
    );
}

#[test]
fn escape_at_end_of_input_is_an_error() {
    let text = SourceText::<u8>::new("\\");
    let mut cursor = text.cursor();
    cursor.raw_char();
    cursor.raw_char(); // past the backslash, on EOF
    let err = decode_escape(&mut cursor, &[]).err();
    assert_eq!(
        err.map(|e| e.kind),
        Some(ScanErrorKind::Escape(EscapeError::UnexpectedEof))
    );
}

#[test]
fn error_message_names_the_trigger() {
    let err = decode("q").err();
    let message = err.map(|kind| kind.to_string());
    assert_eq!(message.as_deref(), Some("no escape sequence matches `\\q`"));
}
