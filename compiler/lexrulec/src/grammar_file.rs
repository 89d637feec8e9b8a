//! Grammar files: one `<id> <rule text>` per line.
//!
//! Blank lines and lines starting with `#` are skipped. Each rule reports
//! its diagnostics under the filename `<file>:<line>`, so columns stay
//! relative to the rule text.

use lexrule_core::SourceText;
use lexrule_diagnostic::{Diagnostic, ErrorCode};
use lexrule_rules::{GrammarBuilder, GrammarConfig};
use tracing::debug;

/// Read every rule of `text` into a builder.
///
/// Malformed lines are all reported, in file order.
pub fn load_grammar(
    path: &str,
    text: &str,
    config: GrammarConfig,
) -> Result<GrammarBuilder, Vec<Diagnostic>> {
    let mut builder = GrammarBuilder::new(config);
    let mut errors = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let filename = format!("{path}:{}", index + 1);
        let (id, rule) = trimmed.split_once(char::is_whitespace).unwrap_or((trimmed, ""));

        let Ok(id) = id.parse::<u32>() else {
            errors.push(line_error(line, &filename, format!("expected a rule id, found `{id}`")));
            continue;
        };
        let rule = rule.trim();
        if rule.is_empty() {
            errors.push(line_error(line, &filename, format!("rule {id} has no rule text")));
            continue;
        }

        builder.rule_at(id, rule, filename);
    }

    debug!(path, rules = builder.len(), errors = errors.len(), "loaded grammar file");
    if errors.is_empty() {
        Ok(builder)
    } else {
        Err(errors)
    }
}

/// Diagnostic pointing at the first non-layout character of `line`.
fn line_error(line: &str, filename: &str, message: String) -> Diagnostic {
    let source = SourceText::<char>::with_filename(line, filename);
    let mut cursor = source.cursor();
    cursor.clean_char();
    Diagnostic::new(ErrorCode::E0402, message, &cursor.snapshot())
}
