//! # pss-model
//!
//! Resilient PSS (Portable Stimulus Standard) parsing into a typed component
//! model for editor tooling.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! worker    → Background parsing on a thread pool
//!   ↓
//! pipeline  → Two-stage parse (SLL/bail, then LL/recover) into a model
//!   ↓
//! visitor   → Syntax tree → PssObject / MetaData
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, typed AST
//!   ↓
//! config    → Grammar version, error limit, worker sizing
//! ```
//!
//! `ide` renders model objects for hover and documentation.

// ============================================================================
// MODULES (dependency order: config → parser → model → visitor → pipeline → worker)
// ============================================================================

/// Configuration: embedded defaults, files, environment
pub mod config;

/// Parser: Logos lexer, recursive-descent parser, grammar adapter
pub mod parser;

/// Domain objects and legacy declaration records
pub mod model;

/// Syntax tree visitors producing the model
pub mod visitor;

/// Two-stage parse-to-model driver
pub mod pipeline;

/// Thread-pool parse worker
pub mod worker;

/// Hover markdown and doc comments for model objects
pub mod ide;

// Re-export the entry points hosts use
pub use config::{GrammarVersion, PssConfig};
pub use model::{MetaData, MetaKind, ObjectKind, PssObject};
pub use pipeline::{ParseOutcome, Stage, StageError, build_ast, build_model, parse};
pub use worker::{ParseRequest, ParseResponse, ParseWorker, WorkerError};
