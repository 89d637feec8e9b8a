use std::io::{Error, ErrorKind};

use pretty_assertions::assert_eq;

use super::read_error_message;

#[test]
fn read_errors_name_the_file_role() {
    assert_eq!(
        read_error_message("grammar", "tokens.lex", &Error::from(ErrorKind::NotFound)),
        "error: cannot read grammar file 'tokens.lex': no such file"
    );
    assert_eq!(
        read_error_message("input", "main.src", &Error::from(ErrorKind::InvalidData)),
        "error: cannot read input file 'main.src': not valid UTF-8"
    );
    assert_eq!(
        read_error_message("input", "x", &Error::other("disk on fire")),
        "error: cannot read input file 'x': disk on fire"
    );
}
