//! CLI command implementations

pub mod decode;
pub mod fields;
pub mod roundtrip;
pub mod types;

pub use decode::handle_decode;
pub use fields::handle_fields;
pub use roundtrip::handle_roundtrip;
pub use types::handle_types;

use super::catalog::{self, CatalogEntry};
use super::error::CliError;
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;

/// Load input content from file or stdin
fn load_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        Ok(content)
    } else {
        let path = PathBuf::from(input);
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))
    }
}

fn parse_json(content: &str) -> Result<Value, CliError> {
    serde_json::from_str(content).map_err(|e| CliError::InvalidJson(e.to_string()))
}

fn resolve_type(name: &str) -> Result<&'static CatalogEntry, CliError> {
    catalog::lookup(name).ok_or_else(|| CliError::UnknownType(name.to_string()))
}
