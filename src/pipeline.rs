//! Two-stage parse-to-model pipeline
//!
//! ```text
//! text ──► Stage 1: SLL prediction, bail on first error ──► visitor ──► done
//!                 │ abort or visitor error
//!                 ▼
//!          Stage 2: LL prediction, recover from errors ──► visitor ──► done
//!                 │ abort or visitor error
//!                 ▼
//!              unparseable (callers of `parse` see an empty result)
//! ```
//!
//! Stage 1 is fast and handles well-formed files. Stage 2 re-parses from
//! scratch with full lookahead and error recovery. Each stage gets its own
//! visitor, so nothing from a failed Stage 1 leaks into the result.

use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::config::{self, PssConfig};
use crate::model::{MetaData, PssObject};
use crate::parser::{ErrorStrategy, GrammarAdapter, ParseAbort, PredictionMode, PssGrammar};
use crate::visitor::{MetaVisitor, ModelError, ModelVisitor, TreeVisitor};

/// Which attempt produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// SLL prediction, bail on the first error
    Optimistic,
    /// LL prediction, recover from errors
    Exhaustive,
}

impl Stage {
    fn settings(self) -> (PredictionMode, ErrorStrategy) {
        match self {
            Self::Optimistic => (PredictionMode::Sll, ErrorStrategy::Bail),
            Self::Exhaustive => (PredictionMode::Ll, ErrorStrategy::Recover),
        }
    }
}

/// Why one stage failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageError {
    #[error(transparent)]
    Parse(#[from] ParseAbort),
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result of building a model.
///
/// `Parsed` with no objects means the input was valid but declared nothing
/// the model records; `Unparseable` means neither stage could handle it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome<T = Vec<PssObject>> {
    Parsed { objects: T, stage: Stage },
    Unparseable { stage1: StageError, stage2: StageError },
}

impl<T: Default> ParseOutcome<T> {
    /// The objects, or an empty collection if the input was unparseable.
    pub fn into_objects(self) -> T {
        match self {
            Self::Parsed { objects, .. } => objects,
            Self::Unparseable { .. } => T::default(),
        }
    }
}

impl<T> ParseOutcome<T> {
    pub fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed { .. })
    }

    /// The stage that succeeded, if any.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Parsed { stage, .. } => Some(*stage),
            Self::Unparseable { .. } => None,
        }
    }
}

/// What a single stage tells the driver to do next.
enum StageOutcome<T> {
    Success(T),
    Escalate(StageError),
    Empty(StageError),
}

fn run_stage<A, V>(adapter: &mut A, mut visitor: V, stage: Stage) -> StageOutcome<V::Output>
where
    A: GrammarAdapter,
    V: TreeVisitor,
{
    let (mode, strategy) = stage.settings();
    adapter.set_prediction_mode(mode);
    adapter.set_error_strategy(strategy);
    trace!(?stage, ?mode, ?strategy, "parse stage started");

    let result = adapter.parse().map_err(StageError::from).and_then(|parse| {
        if !parse.ok() {
            let errors: Vec<String> = parse.errors.iter().map(|e| e.format()).collect();
            debug!(?stage, ?errors, "parse recovered from syntax errors");
        }
        visitor.visit(&parse.syntax())?;
        Ok(visitor.finish())
    });

    match (result, stage) {
        (Ok(output), _) => StageOutcome::Success(output),
        (Err(err), Stage::Optimistic) => StageOutcome::Escalate(err),
        (Err(err), Stage::Exhaustive) => StageOutcome::Empty(err),
    }
}

/// Drive any adapter through both stages, with a fresh visitor per stage.
pub fn build_model_with<A, V, F>(adapter: &mut A, mut new_visitor: F) -> ParseOutcome<V::Output>
where
    A: GrammarAdapter,
    V: TreeVisitor,
    F: FnMut() -> V,
{
    let stage1 = match run_stage(adapter, new_visitor(), Stage::Optimistic) {
        StageOutcome::Success(objects) => {
            return ParseOutcome::Parsed {
                objects,
                stage: Stage::Optimistic,
            };
        }
        StageOutcome::Escalate(err) | StageOutcome::Empty(err) => err,
    };
    let ambiguous = matches!(&stage1, StageError::Parse(abort) if abort.is_ambiguity());
    debug!(error = %stage1, ambiguous, "optimistic parse failed, retrying with full lookahead");

    match run_stage(adapter, new_visitor(), Stage::Exhaustive) {
        StageOutcome::Success(objects) => ParseOutcome::Parsed {
            objects,
            stage: Stage::Exhaustive,
        },
        StageOutcome::Escalate(stage2) | StageOutcome::Empty(stage2) => {
            ParseOutcome::Unparseable { stage1, stage2 }
        }
    }
}

/// Build the typed model of `text` with the active configuration.
pub fn build_model(uri: &str, text: &str) -> ParseOutcome {
    let config = config::active();
    build_model_in(uri, text, &config)
}

/// Build the typed model of `text` with an explicit configuration.
pub fn build_model_in(uri: &str, text: &str, config: &PssConfig) -> ParseOutcome {
    let mut adapter = PssGrammar::with_config(text, config);
    let outcome = build_model_with(&mut adapter, || ModelVisitor::new(uri));
    if let ParseOutcome::Unparseable { stage2, .. } = &outcome {
        warn!(file = file_name(uri), error = %stage2, "parsing failed");
    }
    outcome
}

/// Parse `text` into model objects. Never fails: unparseable input gives an
/// empty vector.
pub fn parse(uri: &str, text: &str) -> Vec<PssObject> {
    build_model(uri, text).into_objects()
}

/// Legacy extraction: one recovering parse, flat deduplicated records.
pub fn build_ast(uri: &str, text: &str) -> Vec<MetaData> {
    let config = config::active();
    build_ast_in(uri, text, &config)
}

pub fn build_ast_in(uri: &str, text: &str, config: &PssConfig) -> Vec<MetaData> {
    let mut adapter = PssGrammar::with_config(text, config);
    let parse = match adapter.parse() {
        Ok(parse) => parse,
        Err(err) => {
            debug!(file = file_name(uri), error = %err, "legacy parse aborted");
            return Vec::new();
        }
    };

    let mut visitor = MetaVisitor::new(uri);
    match visitor.visit(&parse.syntax()) {
        Ok(()) => visitor.finish(),
        Err(err) => {
            debug!(file = file_name(uri), error = %err, "legacy extraction failed");
            Vec::new()
        }
    }
}

/// Last path segment of a URI, for log lines.
fn file_name(uri: &str) -> &str {
    uri.rsplit('/').next().unwrap_or(uri)
}
