use pretty_assertions::assert_eq;

use super::parse_literal;
use crate::{LiteralError, RuleErrorKind};
use lexrule_core::{ScanErrorKind, SourceText, StringError};

fn literal(source: &str) -> Result<Vec<u8>, (RuleErrorKind, u64)> {
    let text = SourceText::<u8>::new(source);
    let mut cursor = text.cursor();
    cursor.raw_char();
    parse_literal(&mut cursor).map_err(|e| (e.kind, e.site.location.column))
}

#[test]
fn decodes_escapes() {
    assert_eq!(literal(r#""a\"b\n""#), Ok(b"a\"b\n".to_vec()));
}

#[test]
fn empty_literal_fails_at_column_two() {
    assert_eq!(literal(r#""""#), Err((LiteralError::Empty.into(), 2)));
}

#[test]
fn unterminated_literal() {
    assert_eq!(
        literal(r#""for"#),
        Err((
            RuleErrorKind::Scan(ScanErrorKind::String(StringError::Unterminated {
                quote: u32::from(b'"')
            })),
            5
        ))
    );
}
