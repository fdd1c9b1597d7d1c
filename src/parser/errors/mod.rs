//! Parser error handling module
//!
//! - Categorized error codes for filtering and documentation
//! - Recorded syntax errors (recovering strategy)
//! - Parse aborts (bailing strategy, error limit)

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{ParseAbort, SyntaxError};
