//! Rowan-based parser for PSS
//!
//! This module provides a lossless parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! We build a lossless CST that preserves all whitespace and comments, then
//! read it through a typed AST layer.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind (keyword set depends on grammar version)
//!     ↓
//! Parser (prediction mode + error strategy) → GreenNode tree
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode
//!     ↓
//! Visitors → Domain model
//! ```
//!
//! The parser is only driven through [`GrammarAdapter`], which lets the
//! pipeline re-run a parse under stricter or looser settings.

#[allow(clippy::module_inception)]
mod parser;

pub mod adapter;
pub mod ast;
mod errors;
mod grammar;
mod lexer;
mod syntax_kind;

pub use adapter::{ErrorStrategy, GrammarAdapter, PredictionMode, PssGrammar, parse_pss};
pub use ast::*;
pub use errors::{ErrorCode, ParseAbort, SyntaxError};
pub use lexer::{Lexer, Token, tokenize};
pub use parser::Parse;
pub use syntax_kind::{PssLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};

#[cfg(test)]
mod tests;
