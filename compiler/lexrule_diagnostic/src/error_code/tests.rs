use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E0202.to_string(), "E0202");
    assert_eq!(ErrorCode::E0301.as_str(), "E0301");
}

#[test]
fn test_from_str_round_trips_every_code() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
    assert_eq!("e0105".parse::<ErrorCode>(), Ok(ErrorCode::E0105));
    assert_eq!("E9999".parse::<ErrorCode>(), Err(()));
}

#[test]
fn test_all_is_sorted_and_unique() {
    let names: Vec<&str> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(names, sorted);
}

#[test]
fn test_predicate_exclusivity() {
    for code in ErrorCode::ALL {
        let hits = [
            code.is_scan_error(),
            code.is_item_error(),
            code.is_rule_error(),
            code.is_match_error(),
        ]
        .iter()
        .filter(|hit| **hit)
        .count();
        assert_eq!(hits, 1, "{code} belongs to exactly one layer");
    }
}

#[test]
fn test_every_code_is_described() {
    for code in ErrorCode::ALL {
        assert!(!code.description().is_empty(), "{code} has no description");
    }
}

#[test]
fn test_scan_error_mapping() {
    assert_eq!(
        ErrorCode::for_scan(&CursorError::UnexpectedEof.into()),
        ErrorCode::E0102
    );
    assert_eq!(
        ErrorCode::for_scan(&EscapeError::UnexpectedEof.into()),
        ErrorCode::E0102
    );
    assert_eq!(
        ErrorCode::for_scan(&EscapeError::NoMatch { trigger: 0x71 }.into()),
        ErrorCode::E0103
    );
    assert_eq!(
        ErrorCode::for_scan(
            &CommentError::Unterminated {
                close: "*/".to_string()
            }
            .into()
        ),
        ErrorCode::E0105
    );
    assert_eq!(
        ErrorCode::for_scan(&BracketError::UnexpectedEof { open: 0x28 }.into()),
        ErrorCode::E0107
    );
    assert_eq!(
        ErrorCode::for_scan(&StringError::Unterminated { quote: 0x22 }.into()),
        ErrorCode::E0109
    );
}
