//! CLI error types

use crate::config::ConfigError;
use crate::serialization::SerializationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Unknown type '{0}' (run `graph-model-cli types` for the supported names)")]
    UnknownType(String),

    #[error("Input is not valid JSON: {0}")]
    InvalidJson(String),

    #[error(transparent)]
    Serialization(#[from] SerializationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Round trip of {type_name} changed {count} value(s)")]
    RoundTripMismatch { type_name: String, count: usize },
}
