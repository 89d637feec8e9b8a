//! Command handlers for the `lexrulec` CLI.
//!
//! Each handler prints its own output and exits with status 1 on failure.

mod check;
mod explain;
mod tokenize;

pub use check::check_grammar;
pub use explain::explain_error;
pub use tokenize::tokenize_file;

use lexrule_diagnostic::Diagnostic;
use lexrule_rules::{Grammar, GrammarConfig, RuleError};

use crate::load_grammar;

/// Read the `role` file ("grammar" or "input") at `path`, exiting with
/// status 1 if it cannot be read as UTF-8 text.
pub(crate) fn read_file(role: &str, path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("{}", read_error_message(role, path, &e));
        std::process::exit(1);
    })
}

fn read_error_message(role: &str, path: &str, error: &std::io::Error) -> String {
    let reason = match error.kind() {
        std::io::ErrorKind::NotFound => "no such file".to_owned(),
        std::io::ErrorKind::PermissionDenied => "permission denied".to_owned(),
        std::io::ErrorKind::InvalidData => "not valid UTF-8".to_owned(),
        _ => error.to_string(),
    };
    format!("error: cannot read {role} file '{path}': {reason}")
}

/// Load and build the grammar file at `path`, collecting every diagnostic.
pub(crate) fn build_grammar(
    path: &str,
    config: GrammarConfig,
) -> Result<Grammar<char>, Vec<Diagnostic>> {
    let text = read_file("grammar", path);
    let builder = load_grammar(path, &text, config)?;
    builder
        .build()
        .map_err(|errors| errors.iter().map(RuleError::to_diagnostic).collect())
}

/// Print diagnostics to stderr followed by a count, then exit.
pub(crate) fn report_and_exit(diagnostics: &[Diagnostic]) -> ! {
    for diagnostic in diagnostics {
        eprintln!("{}", diagnostic.render_with_code());
        eprintln!();
    }
    let plural = if diagnostics.len() == 1 { "" } else { "s" };
    eprintln!("{} error{plural} found", diagnostics.len());
    std::process::exit(1);
}

#[cfg(test)]
mod tests;
