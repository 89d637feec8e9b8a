//! The `explain` command: describe an error code.

use lexrule_diagnostic::ErrorCode;

pub fn explain_error(code_str: &str) {
    let Some(code) = code_str.parse::<ErrorCode>().ok() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format E0XXX where X is a digit.");
        eprintln!("Examples: E0102, E0202, E0304");
        std::process::exit(1);
    };

    println!("{code}: {}", code.description());
}
