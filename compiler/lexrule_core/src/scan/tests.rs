use pretty_assertions::assert_eq;

use super::{begin_scanning, Scanner, StartAction};
use crate::{
    Advance, CharCode, CommentDelimiters, CommentSkipper, CursorError, ScanError, ScanErrorKind,
    SourceText, TextCursor,
};

/// Records every character it is handed.
#[derive(Default)]
struct Collect {
    mode: Advance,
    skip_first: bool,
    comments: Option<CommentSkipper<u8>>,
    seen: Vec<u8>,
    ended: bool,
}

impl Scanner<u8> for Collect {
    type Error = ScanError;

    fn advance_mode(&self) -> Advance {
        self.mode
    }

    fn comments(&self) -> Option<&CommentSkipper<u8>> {
        self.comments.as_ref()
    }

    fn on_start(&mut self, _cursor: &mut TextCursor<'_, u8>) -> Result<StartAction, ScanError> {
        Ok(if self.skip_first {
            StartAction::SkipFirst
        } else {
            StartAction::Stay
        })
    }

    fn process_char(&mut self, c: u8, _cursor: &mut TextCursor<'_, u8>) -> Result<(), ScanError> {
        self.seen.push(c);
        Ok(())
    }

    fn on_end(&mut self, _cursor: &mut TextCursor<'_, u8>) -> Result<(), ScanError> {
        self.ended = true;
        Ok(())
    }
}

fn run(scanner: &mut Collect, source: &str, end: u8) -> Result<usize, ScanErrorKind> {
    let text = SourceText::<u8>::new(source);
    let mut cursor = text.cursor();
    begin_scanning(scanner, &mut cursor, end).map_err(|e| e.kind)?;
    Ok(cursor.position())
}

#[test]
fn scans_until_end_symbol() {
    let mut scanner = Collect::default();
    assert_eq!(run(&mut scanner, "abc;def", b';'), Ok(3));
    assert_eq!(scanner.seen, b"abc");
    assert!(scanner.ended);
}

#[test]
fn scans_to_eof_when_end_is_eof() {
    let mut scanner = Collect::default();
    assert_eq!(run(&mut scanner, "a b", u8::EOF), Ok(3));
    assert_eq!(scanner.seen, b"a b");
}

#[test]
fn missing_end_symbol_is_unexpected_eof() {
    let mut scanner = Collect::default();
    assert_eq!(
        run(&mut scanner, "abc", b';'),
        Err(ScanErrorKind::Cursor(CursorError::UnexpectedEof))
    );
    assert!(!scanner.ended);
}

#[test]
fn skip_first_passes_over_opener() {
    let mut scanner = Collect {
        skip_first: true,
        ..Collect::default()
    };
    assert_eq!(run(&mut scanner, "'xy'", b'\''), Ok(3));
    assert_eq!(scanner.seen, b"xy");
}

#[test]
fn clean_mode_drops_layout() {
    let mut scanner = Collect {
        mode: Advance::Clean,
        ..Collect::default()
    };
    run(&mut scanner, "  a \t b\n c", u8::EOF).ok();
    assert_eq!(scanner.seen, b"abc");
}

#[test]
fn comments_are_skipped_before_each_character() {
    let mut scanner = Collect {
        mode: Advance::Clean,
        comments: Some(CommentSkipper::new(&CommentDelimiters::c_style())),
        ..Collect::default()
    };
    run(&mut scanner, "a /* x */ b // y\n  c/**/d", u8::EOF).ok();
    assert_eq!(scanner.seen, b"abcd");
}

#[test]
fn comment_may_run_into_end_symbol() {
    let mut scanner = Collect {
        comments: Some(CommentSkipper::new(&CommentDelimiters::c_style())),
        ..Collect::default()
    };
    assert_eq!(run(&mut scanner, "a/*x*/;", b';'), Ok(6));
    assert_eq!(scanner.seen, b"a");
}

#[test]
fn resumes_on_started_cursor() {
    let text = SourceText::<u8>::new("xab;");
    let mut cursor = text.cursor();
    cursor.raw_char();
    cursor.raw_char(); // on 'a'
    let mut scanner = Collect::default();
    assert!(begin_scanning(&mut scanner, &mut cursor, b';').is_ok());
    assert_eq!(scanner.seen, b"ab");
}
