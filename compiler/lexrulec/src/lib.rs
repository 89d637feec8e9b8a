//! Library half of the `lexrulec` driver.
//!
//! The binary only dispatches on the command name; option handling and
//! grammar file loading live here so they can be tested.

pub mod commands;
pub mod grammar_file;
pub mod options;

use std::sync::Once;

pub use grammar_file::load_grammar;
pub use options::{parse_options, OptionError, Options};

/// Filter directives for the driver; `RUST_LOG` is the fallback.
pub const LOG_ENV: &str = "LEXRULE_LOG";
/// When set, spans are printed as an indented tree.
pub const LOG_TREE_ENV: &str = "LEXRULE_LOG_TREE";

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber once.
///
/// Does nothing unless `LEXRULE_LOG` or `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(directives) = std::env::var(LOG_ENV).or_else(|_| std::env::var("RUST_LOG")) else {
            return;
        };
        let filter = EnvFilter::new(directives);

        if std::env::var_os(LOG_TREE_ENV).is_some() {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
