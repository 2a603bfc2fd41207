//! Shared configuration loader for the collate toolchain.
//!
//! `defaults/collate.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`CollateConfig`].

use collate_wml::WmlOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/collate.default.toml");

/// Top-level configuration consumed by collate applications.
#[derive(Debug, Clone, Deserialize)]
pub struct CollateConfig {
    pub convert: ConvertConfig,
    pub render: RenderConfig,
}

/// Mirrors the knobs exposed by the WML converter.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub highlight_color: String,
    pub link_color: String,
    pub hyperlink_switch: String,
}

impl From<ConvertConfig> for WmlOptions {
    fn from(config: ConvertConfig) -> Self {
        WmlOptions {
            highlight_color: config.highlight_color,
            link_color: config.link_color,
            hyperlink_switch: config.hyperlink_switch,
        }
    }
}

impl From<&ConvertConfig> for WmlOptions {
    fn from(config: &ConvertConfig) -> Self {
        WmlOptions {
            highlight_color: config.highlight_color.clone(),
            link_color: config.link_color.clone(),
            hyperlink_switch: config.hyperlink_switch.clone(),
        }
    }
}

/// Template rendering defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub template: String,
    pub output: String,
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

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<CollateConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<CollateConfig, ConfigError> {
    Loader::new().build()
}
