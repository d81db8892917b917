//! Configuration for the model runtime and CLI

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {message}")]
    Io { path: String, message: String },

    #[error("Invalid config: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

/// Runtime configuration
///
/// Loaded from TOML with camelCase keys, e.g.
///
/// ```toml
/// prettyPrint = true
/// returnOnlyChangedValues = false
/// logFilter = "graph_model_sdk=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GraphModelConfig {
    /// Indent serialized JSON output
    pub pretty_print: bool,

    /// Initial change-tracking view of newly created backing stores
    pub return_only_changed_values: bool,

    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for GraphModelConfig {
    fn default() -> Self {
        Self {
            pretty_print: false,
            return_only_changed_values: false,
            log_filter: "graph_model_sdk=info".to_string(),
        }
    }
}

impl GraphModelConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> GraphModelConfigBuilder {
        GraphModelConfigBuilder::default()
    }

    /// Parse configuration from TOML text; missing keys take defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }
}

/// Builder for GraphModelConfig
#[derive(Debug, Default)]
pub struct GraphModelConfigBuilder {
    config: GraphModelConfig,
}

impl GraphModelConfigBuilder {
    pub fn pretty_print(mut self, pretty: bool) -> Self {
        self.config.pretty_print = pretty;
        self
    }

    pub fn return_only_changed_values(mut self, only_changed: bool) -> Self {
        self.config.return_only_changed_values = only_changed;
        self
    }

    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.log_filter = filter.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> GraphModelConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GraphModelConfig::default();
        assert!(!config.pretty_print);
        assert!(!config.return_only_changed_values);
        assert_eq!(config.log_filter, "graph_model_sdk=info");
    }

    #[test]
    fn test_builder() {
        let config = GraphModelConfig::builder()
            .pretty_print(true)
            .return_only_changed_values(true)
            .log_filter("debug")
            .build();

        assert!(config.pretty_print);
        assert!(config.return_only_changed_values);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GraphModelConfig::from_toml_str("prettyPrint = true\n").unwrap();
        assert!(config.pretty_print);
        assert!(!config.return_only_changed_values);
        assert_eq!(config.log_filter, "graph_model_sdk=info");
    }

    #[test]
    fn test_invalid_toml() {
        let err = GraphModelConfig::from_toml_str("prettyPrint = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "returnOnlyChangedValues = true").unwrap();
        writeln!(file, "logFilter = \"trace\"").unwrap();

        let config = GraphModelConfig::load(file.path()).unwrap();
        assert!(config.return_only_changed_values);
        assert_eq!(config.log_filter, "trace");
    }

    #[test]
    fn test_load_missing_file() {
        let err = GraphModelConfig::load("/nonexistent/graph-model.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
