//! Error types for parsing and writing models

use crate::store::StoreError;
use thiserror::Error;

/// Errors that can occur while decoding or encoding a model
#[derive(Error, Debug)]
pub enum SerializationError {
    /// Backing store access failed
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Wire value has a different type than the field expects
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: &'static str, found: String },

    /// Wire value has the right type but cannot be represented
    #[error("Invalid {kind} value: {value}")]
    InvalidValue { kind: &'static str, value: String },

    /// Input is not well-formed
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// Writer could not produce output
    #[error("Writer error: {0}")]
    Writer(String),
}

impl From<serde_json::Error> for SerializationError {
    fn from(e: serde_json::Error) -> Self {
        SerializationError::JsonParse(e.to_string())
    }
}
