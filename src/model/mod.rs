//! The PSS object model
//!
//! Two shapes of output share this module:
//! - [`PssObject`]: typed domain objects with nested call trees, in document order
//! - [`MetaData`]: flat, deduplicated declaration records for the legacy path

mod meta;
mod types;

pub use meta::{MetaData, MetaKind};
pub use types::{AccessModifier, AssignOp, ObjectKind, Parameter, PlatformQualifier, PssObject};
