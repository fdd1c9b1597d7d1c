//! Recursive descent parser state for PSS
//!
//! Builds a rowan GreenNode tree from tokens. The grammar rules live in
//! [`super::grammar`]; this module owns token inspection, node building and
//! the two knobs the adapter exposes: how far prediction may look ahead and
//! what happens on the first error.

use super::adapter::{ErrorStrategy, PredictionMode};
use super::errors::{ErrorCode, ParseAbort, SyntaxError};
use super::lexer::Token;
use super::syntax_kind::{SyntaxKind, SyntaxNode};
use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any recovered errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Knobs fixed for the duration of one parse
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParserSettings {
    pub mode: PredictionMode,
    pub strategy: ErrorStrategy,
    pub error_limit: usize,
    pub max_depth: usize,
}

/// The parser state
pub(crate) struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
    settings: ParserSettings,
    abort: Option<ParseAbort>,
    depth: usize,
}

impl<'t, 'a> Parser<'t, 'a> {
    pub(crate) fn new(tokens: &'t [Token<'a>], settings: ParserSettings) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
            settings,
            abort: None,
            depth: 0,
        }
    }

    pub(crate) fn finish(self) -> Result<Parse, ParseAbort> {
        if let Some(abort) = self.abort {
            return Err(abort);
        }
        Ok(Parse {
            green: self.builder.finish(),
            errors: self.errors,
        })
    }

    pub(crate) fn mode(&self) -> PredictionMode {
        self.settings.mode
    }

    pub(crate) fn aborted(&self) -> bool {
        self.abort.is_some()
    }

    // =========================================================================
    // Token inspection (all lookahead skips trivia)
    // =========================================================================

    /// Raw index of the next token, trivia included. Used for progress checks.
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    fn nth_index(&self, n: usize) -> Option<usize> {
        let mut count = 0;
        for (idx, token) in self.tokens.iter().enumerate().skip(self.pos) {
            if token.kind.is_trivia() {
                continue;
            }
            if count == n {
                return Some(idx);
            }
            count += 1;
        }
        None
    }

    /// Kind of the nth significant token ahead; `ERROR` past the end.
    pub(crate) fn nth(&self, n: usize) -> SyntaxKind {
        if self.aborted() {
            return SyntaxKind::ERROR;
        }
        self.nth_index(n)
            .map(|idx| self.tokens[idx].kind)
            .unwrap_or(SyntaxKind::ERROR)
    }

    pub(crate) fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    pub(crate) fn current_text(&self) -> &str {
        self.nth_index(0)
            .map(|idx| self.tokens[idx].text)
            .unwrap_or("")
    }

    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(crate) fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.current())
    }

    pub(crate) fn nth_at(&self, n: usize, kind: SyntaxKind) -> bool {
        self.nth(n) == kind
    }

    /// True once no significant tokens remain, or the parse was aborted.
    pub(crate) fn at_eof(&self) -> bool {
        self.aborted() || self.nth_index(0).is_none()
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    /// Consume pending trivia into the currently open node.
    pub(crate) fn skip_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.pos) {
            if !token.kind.is_trivia() {
                break;
            }
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    /// Consume the next significant token (and the trivia before it).
    pub(crate) fn bump(&mut self) {
        if self.aborted() {
            return;
        }
        self.skip_trivia();
        if let Some(token) = self.tokens.get(self.pos) {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            return true;
        }
        let code = match kind {
            SyntaxKind::SEMICOLON => ErrorCode::E0201,
            SyntaxKind::R_BRACE => ErrorCode::E0202,
            SyntaxKind::R_PAREN => ErrorCode::E0203,
            SyntaxKind::R_BRACKET | SyntaxKind::GT => ErrorCode::E0204,
            SyntaxKind::IDENT => ErrorCode::E0301,
            _ => ErrorCode::E0902,
        };
        self.error(code, format!("expected {:?}, found {:?}", kind, self.current()));
        false
    }

    /// Consume tokens up to (not including) one of `stop` at nesting depth zero.
    ///
    /// Parentheses, brackets and braces are kept balanced.
    pub(crate) fn bump_balanced_until(&mut self, stop: &[SyntaxKind]) {
        let mut depth = 0usize;
        while !self.at_eof() {
            let kind = self.current();
            if depth == 0 && stop.contains(&kind) {
                break;
            }
            match kind {
                SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE => depth += 1,
                SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET | SyntaxKind::R_BRACE => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                _ => {}
            }
            self.bump();
        }
    }

    /// Consume a `{ ... }` group, or report an unclosed brace.
    pub(crate) fn bump_braced(&mut self) {
        if !self.expect(SyntaxKind::L_BRACE) {
            return;
        }
        self.bump_balanced_until(&[SyntaxKind::R_BRACE]);
        self.expect(SyntaxKind::R_BRACE);
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn current_range(&self) -> TextRange {
        match self.nth_index(0) {
            Some(idx) => {
                let token = &self.tokens[idx];
                TextRange::at(token.offset, TextSize::of(token.text))
            }
            None => {
                let end = self
                    .tokens
                    .last()
                    .map(|t| t.offset + TextSize::of(t.text))
                    .unwrap_or_default();
                TextRange::empty(end)
            }
        }
    }

    /// Record a syntax error, honouring the error strategy.
    pub(crate) fn error(&mut self, code: ErrorCode, message: impl Into<String>) {
        if self.aborted() {
            return;
        }
        let error = SyntaxError::new(message, self.current_range(), code);
        match self.settings.strategy {
            ErrorStrategy::Bail => self.abort = Some(ParseAbort::Syntax(error)),
            ErrorStrategy::Recover => {
                self.errors.push(error);
                if self.errors.len() > self.settings.error_limit {
                    self.abort = Some(ParseAbort::ErrorLimit(self.errors.len()));
                }
            }
        }
    }

    /// Run a recursive rule one nesting level down.
    ///
    /// Past `max_depth` the parse is aborted whatever the error strategy, and
    /// `rule` is not run.
    pub(crate) fn nested(&mut self, rule: impl FnOnce(&mut Self)) {
        if self.aborted() {
            return;
        }
        if self.depth >= self.settings.max_depth {
            self.abort = Some(ParseAbort::TooDeep(self.settings.max_depth));
            return;
        }
        self.depth += 1;
        rule(self);
        self.depth -= 1;
    }

    /// Report that fast prediction could not decide.
    ///
    /// Under `Bail` this aborts the parse. Under `Recover` nothing is recorded
    /// and the caller goes on to decide with full lookahead.
    pub(crate) fn ambiguity(&mut self, message: impl Into<String>) {
        if self.aborted() || self.settings.strategy == ErrorStrategy::Recover {
            return;
        }
        let error = SyntaxError::new(message, self.current_range(), ErrorCode::E0403);
        self.abort = Some(ParseAbort::Ambiguity(error));
    }

    /// Record an error and wrap the offending tokens in an `ERROR` node.
    ///
    /// Stops before a token in `recovery`, but always consumes at least one
    /// token so callers make progress.
    pub(crate) fn error_recover(
        &mut self,
        code: ErrorCode,
        message: impl Into<String>,
        recovery: &[SyntaxKind],
    ) {
        self.error(code, message);
        if self.at_eof() {
            return;
        }
        self.start_node(SyntaxKind::ERROR);
        self.bump();
        while !self.at_eof() && !self.at_any(recovery) {
            self.bump();
        }
        self.finish_node();
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    /// Open a node. Pending trivia stays in the parent so nodes start on a
    /// significant token.
    pub(crate) fn start_node(&mut self, kind: SyntaxKind) {
        self.skip_trivia();
        self.builder.start_node(kind.into());
    }

    pub(crate) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(crate) fn checkpoint(&mut self) -> Checkpoint {
        self.skip_trivia();
        self.builder.checkpoint()
    }

    pub(crate) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    // =========================================================================
    // Raw lookahead scanning (used by exhaustive prediction)
    // =========================================================================

    /// Index (in significant tokens from the current one) just past a
    /// balanced group opened at `start`, or `None` if it never closes.
    pub(crate) fn scan_balanced(&self, start: usize, open: SyntaxKind, close: SyntaxKind) -> Option<usize> {
        let mut depth = 0usize;
        let mut n = start;
        loop {
            let kind = self.nth(n);
            if self.nth_index(n).is_none() {
                return None;
            }
            if kind == open {
                depth += 1;
            } else if kind == close {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(n + 1);
                }
            } else if matches!(kind, SyntaxKind::SEMICOLON | SyntaxKind::L_BRACE | SyntaxKind::R_BRACE)
                && open != SyntaxKind::L_BRACE
            {
                return None;
            }
            n += 1;
        }
    }
}
