//! Grammar adapter
//!
//! The narrow interface the parse pipeline drives: pick a prediction mode and
//! an error strategy, then parse. [`PssGrammar`] is the real implementation;
//! tests substitute their own.

use std::sync::Arc;

use super::errors::ParseAbort;
use super::grammar;
use super::lexer::{Token, tokenize};
use super::parser::{Parse, Parser, ParserSettings};
use crate::config::{self, PssConfig};

/// How far statement prediction may look ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PredictionMode {
    /// Two tokens. Fast, but some statements cannot be classified.
    Sll,
    /// Unbounded: scan the whole reference path before deciding.
    #[default]
    Ll,
}

/// What the parser does when the input does not match the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorStrategy {
    /// Abort on the first syntax error or ambiguity.
    Bail,
    /// Record the error, wrap the offending tokens in an `ERROR` node and
    /// continue, up to the configured error limit.
    #[default]
    Recover,
}

/// A parser that can be re-run over the same input under different settings.
pub trait GrammarAdapter {
    fn set_prediction_mode(&mut self, mode: PredictionMode);
    fn set_error_strategy(&mut self, strategy: ErrorStrategy);

    /// Parse the whole input from the start.
    fn parse(&mut self) -> Result<Parse, ParseAbort>;
}

/// The PSS grammar over one source text.
///
/// The text is tokenized once on construction; every call to
/// [`GrammarAdapter::parse`] starts a fresh parse over those tokens.
pub struct PssGrammar<'a> {
    tokens: Vec<Token<'a>>,
    mode: PredictionMode,
    strategy: ErrorStrategy,
    error_limit: usize,
    max_depth: usize,
}

impl<'a> PssGrammar<'a> {
    /// Adapter using the process-wide configuration.
    pub fn new(text: &'a str) -> Self {
        let config: Arc<PssConfig> = config::active();
        Self::with_config(text, &config)
    }

    /// Adapter with an explicit configuration.
    pub fn with_config(text: &'a str, config: &PssConfig) -> Self {
        Self {
            tokens: tokenize(text, config.grammar.version),
            mode: PredictionMode::default(),
            strategy: ErrorStrategy::default(),
            error_limit: config.grammar.error_limit,
            max_depth: config.grammar.max_depth,
        }
    }

    pub fn prediction_mode(&self) -> PredictionMode {
        self.mode
    }

    pub fn error_strategy(&self) -> ErrorStrategy {
        self.strategy
    }
}

impl GrammarAdapter for PssGrammar<'_> {
    fn set_prediction_mode(&mut self, mode: PredictionMode) {
        self.mode = mode;
    }

    fn set_error_strategy(&mut self, strategy: ErrorStrategy) {
        self.strategy = strategy;
    }

    fn parse(&mut self) -> Result<Parse, ParseAbort> {
        let settings = ParserSettings {
            mode: self.mode,
            strategy: self.strategy,
            error_limit: self.error_limit,
            max_depth: self.max_depth,
        };
        let mut parser = Parser::new(&self.tokens, settings);
        grammar::parse_source_file(&mut parser);
        parser.finish()
    }
}

/// Parse `text` once with the adapter defaults and the active configuration.
pub fn parse_pss(text: &str) -> Result<Parse, ParseAbort> {
    PssGrammar::new(text).parse()
}
