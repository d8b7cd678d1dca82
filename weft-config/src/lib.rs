//! Shared configuration loader for the weft toolchain.
//!
//! `defaults/weft.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`WeftConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use weft_codec::TextOptions;

const DEFAULT_TOML: &str = include_str!("../defaults/weft.default.toml");

/// Top-level configuration consumed by weft applications.
#[derive(Debug, Clone, Deserialize)]
pub struct WeftConfig {
    pub render: RenderConfig,
    pub export: ExportConfig,
}

/// Presentation-mode settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Mode used when the caller does not pick one explicitly.
    pub mode: String,
    /// Mode identifiers the CLI accepts.
    pub modes: Vec<String>,
}

impl RenderConfig {
    /// Whether `mode` is one of the configured identifiers.
    pub fn knows_mode(&self, mode: &str) -> bool {
        self.modes.iter().any(|known| known == mode)
    }
}

/// Mirrors the knobs exposed by the JSON text exporter.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Emit strictly escaped JSON text instead of the legacy unescaped form.
    pub escape_strings: bool,
}

impl From<ExportConfig> for TextOptions {
    fn from(config: ExportConfig) -> Self {
        TextOptions {
            escape_strings: config.escape_strings,
        }
    }
}

impl From<&ExportConfig> for TextOptions {
    fn from(config: &ExportConfig) -> Self {
        TextOptions {
            escape_strings: config.escape_strings,
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<WeftConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<WeftConfig, ConfigError> {
    Loader::new().build()
}
