//! The `check` command: parse a grammar file and report every error.

use lexrule_rules::GrammarConfig;

use super::{build_grammar, report_and_exit};

pub fn check_grammar(path: &str, config: GrammarConfig) {
    match build_grammar(path, config) {
        Ok(grammar) => {
            let nonterminals = grammar.symbols().len();
            println!(
                "{path}: {} rules ok ({nonterminals} nonterminals)",
                grammar.len()
            );
        }
        Err(diagnostics) => report_and_exit(&diagnostics),
    }
}
