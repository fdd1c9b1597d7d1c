//! Process-wide configuration.
//!
//! `defaults/pss.default.toml` is embedded into the library so the documented
//! defaults and the runtime defaults cannot drift apart. Hosts layer their own
//! files, `PSS__`-prefixed environment variables and explicit overrides on top
//! with [`Loader`], then publish the result with [`install`].
//!
//! Parses never hold the lock: they take an `Arc` snapshot through [`active`]
//! when they start and keep using it until they finish.

use std::fmt;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, ValueKind};
use parking_lot::RwLock;
use serde::Deserialize;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/pss.default.toml");

/// Revision of the PSS language the lexer recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum GrammarVersion {
    #[serde(rename = "2.0")]
    V2_0,
    #[serde(rename = "2.1")]
    V2_1,
    #[serde(rename = "3.0")]
    V3_0,
}

impl GrammarVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V2_0 => "2.0",
            Self::V2_1 => "2.1",
            Self::V3_0 => "3.0",
        }
    }

    /// `monitor` became a reserved word in 3.0. Older sources may use it as a name.
    pub fn has_monitors(&self) -> bool {
        *self >= Self::V3_0
    }
}

impl fmt::Display for GrammarVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PssConfig {
    pub grammar: GrammarConfig,
    pub worker: WorkerConfig,
}

/// Settings handed to the grammar adapter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GrammarConfig {
    pub version: GrammarVersion,
    /// Errors the recovering parser tolerates before aborting.
    pub error_limit: usize,
    /// Nested grammar rules followed before the parse is abandoned.
    pub max_depth: usize,
}

/// Background worker pool settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkerConfig {
    /// Number of threads; `0` lets rayon decide.
    pub threads: usize,
}

impl Default for PssConfig {
    fn default() -> Self {
        Self {
            grammar: GrammarConfig {
                version: GrammarVersion::V3_0,
                error_limit: 64,
                max_depth: 512,
            },
            worker: WorkerConfig { threads: 0 },
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `PSS__SECTION__KEY` environment variables, e.g. `PSS__GRAMMAR__VERSION=2.1`.
    pub fn with_env(mut self) -> Self {
        self.builder = self
            .builder
            .add_source(Environment::with_prefix("PSS").separator("__"));
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<PssConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

static ACTIVE: LazyLock<RwLock<Arc<PssConfig>>> =
    LazyLock::new(|| RwLock::new(Arc::new(PssConfig::default())));

/// Snapshot of the configuration currently in effect.
pub fn active() -> Arc<PssConfig> {
    ACTIVE.read().clone()
}

/// Replace the process-wide configuration, returning the previous one.
///
/// Parses already running keep the snapshot they started with.
pub fn install(config: PssConfig) -> Arc<PssConfig> {
    let mut guard = ACTIVE.write();
    std::mem::replace(&mut *guard, Arc::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_defaults_match_default_impl() {
        let config = Loader::new().build().expect("defaults to deserialize");
        assert_eq!(config, PssConfig::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("grammar.version", "2.1")
            .expect("override to apply")
            .set_override("grammar.error_limit", 3_i64)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.grammar.version, GrammarVersion::V2_1);
        assert_eq!(config.grammar.error_limit, 3);
        assert_eq!(config.worker.threads, 0);
    }

    #[test]
    fn rejects_unknown_version() {
        let result = Loader::new()
            .set_override("grammar.version", "1.0")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn version_ordering_gates_monitors() {
        assert!(!GrammarVersion::V2_0.has_monitors());
        assert!(!GrammarVersion::V2_1.has_monitors());
        assert!(GrammarVersion::V3_0.has_monitors());
        assert_eq!(GrammarVersion::V2_1.to_string(), "2.1");
    }
}
