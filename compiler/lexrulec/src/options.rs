//! Command-line flags shared by every command.

use lexrule_rules::GrammarConfig;
use thiserror::Error;

/// Parsed flags plus the remaining positional arguments.
#[derive(Clone, Debug, Default)]
pub struct Options {
    pub config: GrammarConfig,
    pub positional: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("unknown option '{0}'")]
    Unknown(String),
    #[error("--line-comment needs a non-empty delimiter")]
    EmptyLineComment,
    #[error("--block-comment expects '<open>,<close>', got '{0}'")]
    BlockComment(String),
}

/// Split `args` (everything after the command name) into flags and
/// positional arguments.
pub fn parse_options(args: &[String]) -> Result<Options, OptionError> {
    let mut options = Options::default();

    for arg in args {
        if arg == "--no-parallel" {
            options.config.parallel = false;
        } else if let Some(delimiter) = arg.strip_prefix("--line-comment=") {
            if delimiter.is_empty() {
                return Err(OptionError::EmptyLineComment);
            }
            options.config.comments.line = Some(delimiter.to_owned());
        } else if let Some(pair) = arg.strip_prefix("--block-comment=") {
            let Some((open, close)) = pair.split_once(',') else {
                return Err(OptionError::BlockComment(pair.to_owned()));
            };
            if open.is_empty() || close.is_empty() {
                return Err(OptionError::BlockComment(pair.to_owned()));
            }
            options.config.comments.block = Some((open.to_owned(), close.to_owned()));
        } else if arg.starts_with("--") {
            return Err(OptionError::Unknown(arg.clone()));
        } else {
            options.positional.push(arg.clone());
        }
    }

    Ok(options)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
