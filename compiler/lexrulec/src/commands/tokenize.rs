//! The `match` command: tokenize an input file with a grammar.

use lexrule_core::SourceText;
use lexrule_rules::{tokenize, GrammarConfig};

use super::{build_grammar, read_file, report_and_exit};

/// Print one `line:column rule len text` row per token of `input_path`.
pub fn tokenize_file(grammar_path: &str, input_path: &str, config: GrammarConfig) {
    let grammar = match build_grammar(grammar_path, config) {
        Ok(grammar) => grammar,
        Err(diagnostics) => report_and_exit(&diagnostics),
    };

    let source = SourceText::<char>::with_filename(&read_file("input", input_path), input_path);
    match tokenize(&grammar, &source) {
        Ok(tokens) => {
            for token in &tokens {
                println!("{token}");
            }
        }
        Err(diagnostic) => report_and_exit(&[diagnostic]),
    }
}
