//! Syntax errors and parse aborts
//!
//! A [`SyntaxError`] is a recorded diagnostic; the recovering strategy collects
//! them and keeps going. A [`ParseAbort`] ends the parse: it is what the bailing
//! strategy raises on the first problem, and what the recovering strategy
//! raises once it has seen too many errors.

use rowan::{TextRange, TextSize};
use thiserror::Error;

use super::codes::ErrorCode;

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Human-readable error message
    pub message: String,
    /// Source location
    pub range: TextRange,
    /// Categorized error code
    pub code: ErrorCode,
}

impl SyntaxError {
    /// Create a new syntax error
    pub fn new(message: impl Into<String>, range: TextRange, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            range,
            code,
        }
    }

    /// Create an error at a specific offset with zero-width range
    pub fn at_offset(message: impl Into<String>, offset: TextSize, code: ErrorCode) -> Self {
        Self::new(message, TextRange::empty(offset), code)
    }

    /// Format the error for display
    pub fn format(&self) -> String {
        format!("{}: {}", self.code, self.message)
    }
}

/// Why a parse stopped before producing a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAbort {
    /// Fast prediction could not choose between alternatives.
    #[error("ambiguous input at offset {:?}: {}", .0.range.start(), .0.message)]
    Ambiguity(SyntaxError),

    /// First syntax error under the bailing strategy.
    #[error("syntax error at offset {:?}: {}", .0.range.start(), .0.message)]
    Syntax(SyntaxError),

    /// The recovering strategy gave up.
    #[error("gave up after {0} syntax errors")]
    ErrorLimit(usize),

    /// Input nested deeper than the configured limit.
    #[error("nesting deeper than {0} levels")]
    TooDeep(usize),
}

impl ParseAbort {
    /// The error that triggered the abort, when there is a single one.
    pub fn syntax_error(&self) -> Option<&SyntaxError> {
        match self {
            Self::Ambiguity(err) | Self::Syntax(err) => Some(err),
            Self::ErrorLimit(_) | Self::TooDeep(_) => None,
        }
    }

    pub fn is_ambiguity(&self) -> bool {
        matches!(self, Self::Ambiguity(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_new() {
        let err = SyntaxError::new(
            "expected ';'",
            TextRange::new(TextSize::new(10), TextSize::new(11)),
            ErrorCode::E0201,
        );

        assert_eq!(err.message, "expected ';'");
        assert_eq!(err.code, ErrorCode::E0201);
        assert_eq!(err.format(), "E0201: expected ';'");
    }

    #[test]
    fn test_abort_display() {
        let err = SyntaxError::at_offset("cannot classify statement", TextSize::new(7), ErrorCode::E0403);
        let abort = ParseAbort::Ambiguity(err.clone());
        assert_eq!(
            abort.to_string(),
            "ambiguous input at offset 7: cannot classify statement"
        );
        assert!(abort.is_ambiguity());
        assert_eq!(abort.syntax_error(), Some(&err));

        let limit = ParseAbort::ErrorLimit(65);
        assert_eq!(limit.to_string(), "gave up after 65 syntax errors");
        assert!(limit.syntax_error().is_none());

        let deep = ParseAbort::TooDeep(512);
        assert_eq!(deep.to_string(), "nesting deeper than 512 levels");
        assert!(!deep.is_ambiguity());
        assert!(deep.syntax_error().is_none());
    }
}
