//! Tree-to-model visitors
//!
//! A visitor walks a parsed source file in document pre-order and collects
//! model output. Two are provided:
//! - [`ModelVisitor`]: typed [`PssObject`](crate::model::PssObject)s with nested call trees
//! - [`MetaVisitor`]: flat [`MetaData`](crate::model::MetaData) records, deduplicated
//!
//! The pipeline creates a fresh visitor for every parse attempt, so a visitor
//! is used for exactly one tree.

mod advanced;
mod legacy;

pub use advanced::ModelVisitor;
pub use legacy::MetaVisitor;

use thiserror::Error;

use crate::parser::{SyntaxKind, SyntaxNode};

/// The visitor met a tree it cannot walk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("expected a source file root, found {0:?}")]
    UnexpectedRoot(SyntaxKind),
}

/// Walks one syntax tree and produces output from it.
pub trait TreeVisitor {
    type Output;

    /// Walk the tree rooted at `root`.
    fn visit(&mut self, root: &SyntaxNode) -> Result<(), ModelError>;

    /// Consume the visitor and return what it collected.
    fn finish(self) -> Self::Output;
}

#[cfg(test)]
mod tests;
