//! Grammar construction: many rules, one symbol table.

use std::sync::Arc;

use lexrule_core::{CharCode, CommentDelimiters, CommentSkipper, Location, SourceText};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{debug, debug_span};

use crate::{Rule, RuleError, RuleGrammarError, RuleId, RuleParser, SymbolTable};

/// Grammar construction settings.
#[derive(Clone, Debug)]
pub struct GrammarConfig {
    /// Comments skipped inside rule strings.
    pub comments: CommentDelimiters,
    /// Parse rules on the rayon pool.
    pub parallel: bool,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        GrammarConfig {
            comments: CommentDelimiters::none(),
            parallel: true,
        }
    }
}

impl GrammarConfig {
    #[must_use]
    pub fn with_comments(mut self, comments: CommentDelimiters) -> Self {
        self.comments = comments;
        self
    }

    #[must_use]
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

#[derive(Clone, Debug)]
struct RuleSource {
    id: RuleId,
    text: String,
    filename: Arc<str>,
}

/// Collects rule strings and parses them into a [`Grammar`].
#[derive(Clone, Debug, Default)]
pub struct GrammarBuilder {
    config: GrammarConfig,
    sources: Vec<RuleSource>,
}

impl GrammarBuilder {
    pub fn new(config: GrammarConfig) -> Self {
        GrammarBuilder {
            config,
            sources: Vec::new(),
        }
    }

    pub fn config(&self) -> &GrammarConfig {
        &self.config
    }

    /// Add a rule.
    pub fn rule(&mut self, id: impl Into<RuleId>, text: impl Into<String>) -> &mut Self {
        self.rule_at(id, text, Location::DEFAULT_FILENAME)
    }

    /// Add a rule whose diagnostics report `filename`.
    pub fn rule_at(
        &mut self,
        id: impl Into<RuleId>,
        text: impl Into<String>,
        filename: impl Into<Arc<str>>,
    ) -> &mut Self {
        self.sources.push(RuleSource {
            id: id.into(),
            text: text.into(),
            filename: filename.into(),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Parse every rule.
    ///
    /// Rules are independent apart from the shared symbol table, so with
    /// `parallel` set they are parsed on the rayon pool. Errors are
    /// returned for every failing rule, in the order the rules were added.
    /// A rule id seen before is rejected without parsing.
    pub fn build<C: CharCode>(&self) -> Result<Grammar<C>, Vec<RuleError>> {
        let _span = debug_span!(
            "build_grammar",
            rules = self.sources.len(),
            parallel = self.config.parallel
        )
        .entered();

        let mut seen = FxHashSet::default();
        let duplicate: Vec<bool> = self.sources.iter().map(|s| !seen.insert(s.id)).collect();

        let symbols = SymbolTable::new();
        let skipper = CommentSkipper::<C>::new(&self.config.comments);
        let parse = |(source, &duplicate): (&RuleSource, &bool)| -> Result<Rule<C>, RuleError> {
            let text = SourceText::<C>::with_filename(&source.text, Arc::clone(&source.filename));
            let mut cursor = text.cursor();
            if duplicate {
                cursor.clean_char();
                return Err(RuleError {
                    rule: source.id,
                    kind: RuleGrammarError::DuplicateRuleId { rule: source.id }.into(),
                    site: cursor.snapshot(),
                });
            }
            RuleParser::new(source.id, &symbols)
                .with_comments(&skipper)
                .parse(&mut cursor)
        };

        let results: Vec<Result<Rule<C>, RuleError>> = if self.config.parallel {
            self.sources
                .par_iter()
                .zip(duplicate.par_iter())
                .map(&parse)
                .collect()
        } else {
            self.sources.iter().zip(duplicate.iter()).map(&parse).collect()
        };

        let mut rules = Vec::with_capacity(results.len());
        let mut errors = Vec::new();
        for result in results {
            match result {
                Ok(rule) => rules.push(rule),
                Err(error) => errors.push(error),
            }
        }

        if errors.is_empty() {
            debug!(rules = rules.len(), nonterminals = symbols.len(), "grammar built");
            Ok(Grammar { rules, symbols })
        } else {
            debug!(errors = errors.len(), "grammar rejected");
            Err(errors)
        }
    }
}

/// Parsed rules of one grammar plus its nonterminal bindings.
#[derive(Clone, Debug)]
pub struct Grammar<C: CharCode> {
    rules: Vec<Rule<C>>,
    symbols: SymbolTable,
}

impl<C: CharCode> Grammar<C> {
    /// Rules in the order they were added.
    pub fn rules(&self) -> &[Rule<C>] {
        &self.rules
    }

    pub fn rule(&self, id: RuleId) -> Option<&Rule<C>> {
        self.rules.iter().find(|rule| rule.id() == id)
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// The rule defining nonterminal `name`.
    pub fn nonterminal(&self, name: &str) -> Option<&Rule<C>> {
        self.symbols.lookup(name).and_then(|id| self.rule(id))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
