//! Decode command implementation

use super::{load_input, parse_json, resolve_type};
use crate::cli::error::CliError;
use crate::cli::output::format_decode_report;
use crate::config::GraphModelConfig;
use crate::serialization::SerializationError;
use crate::serialization::json::to_json_string;

/// Handle the decode command
pub fn handle_decode(
    type_name: &str,
    input: &str,
    config: &GraphModelConfig,
) -> Result<(), CliError> {
    let entry = resolve_type(type_name)?;
    let value = parse_json(&load_input(input)?)?;

    let decoded = entry.decode(&value)?;
    let additional_keys: Vec<String> = decoded
        .model
        .additional_data()
        .map_err(SerializationError::from)?
        .keys()
        .cloned()
        .collect();
    tracing::debug!(
        requested = entry.name,
        resolved = decoded.type_name,
        additional = additional_keys.len(),
        "Decoded input"
    );

    let json = to_json_string(decoded.model.as_ref(), config.pretty_print)?;
    print!(
        "{}",
        format_decode_report(entry.name, decoded.type_name, &additional_keys, &json)
    );
    Ok(())
}
