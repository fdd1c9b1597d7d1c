//! Shared test helpers.
#![allow(dead_code)]

pub mod source_fixtures;

use pss::config::PssConfig;

pub const URI: &str = "file:///work/top.pss";

/// Configuration with the built-in defaults, independent of the process-wide one.
pub fn default_config() -> PssConfig {
    PssConfig::default()
}
