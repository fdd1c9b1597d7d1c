//! Editor presentation of model objects.
//!
//! Pure functions: take a [`PssObject`](crate::model::PssObject), return text.
//! Conversion to protocol types happens at the host boundary.

mod hover;

pub use hover::{doc_comment, hover_markdown};
