use lexrule_core::CommentDelimiters;
use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|arg| (*arg).to_owned()).collect()
}

#[test]
fn defaults_are_parallel_without_comments() {
    let options = parse_options(&args(&["rules.lex"])).unwrap();
    assert!(options.config.parallel);
    assert!(options.config.comments.is_empty());
    assert_eq!(options.positional, args(&["rules.lex"]));
}

#[test]
fn flags_may_appear_anywhere() {
    let options = parse_options(&args(&[
        "--no-parallel",
        "rules.lex",
        "--line-comment=//",
        "input.txt",
        "--block-comment=/*,*/",
    ]))
    .unwrap();
    assert!(!options.config.parallel);
    assert_eq!(options.config.comments, CommentDelimiters::c_style());
    assert_eq!(options.positional, args(&["rules.lex", "input.txt"]));
}

#[test]
fn malformed_flags_are_rejected() {
    assert_eq!(
        parse_options(&args(&["--line-comment="])).unwrap_err(),
        OptionError::EmptyLineComment
    );
    assert_eq!(
        parse_options(&args(&["--block-comment=(*"])).unwrap_err(),
        OptionError::BlockComment("(*".to_owned())
    );
    assert_eq!(
        parse_options(&args(&["--block-comment=(*,"])).unwrap_err(),
        OptionError::BlockComment("(*,".to_owned())
    );
    assert_eq!(
        parse_options(&args(&["--verbose"])).unwrap_err(),
        OptionError::Unknown("--verbose".to_owned())
    );
}
