//! Roundtrip command implementation

use super::{load_input, parse_json, resolve_type};
use crate::cli::error::CliError;
use crate::cli::output::format_differences;
use crate::config::GraphModelConfig;
use crate::serialization::ODATA_TYPE_WIRE_KEY;
use crate::serialization::json::{to_json_string, to_json_value};
use serde_json::Value;

/// Handle the roundtrip command
///
/// Fails with `CliError::RoundTripMismatch` when re-encoding changes the document.
pub fn handle_roundtrip(
    type_name: &str,
    input: &str,
    config: &GraphModelConfig,
) -> Result<(), CliError> {
    let entry = resolve_type(type_name)?;
    let original = parse_json(&load_input(input)?)?;

    let decoded = entry.decode(&original)?;
    let encoded = to_json_value(decoded.model.as_ref())?;
    let differences = json_differences(&original, &encoded);

    if differences.is_empty() {
        println!("Round trip of {} preserved the document", decoded.type_name);
        return Ok(());
    }

    eprintln!("Round trip of {} changed the document:", decoded.type_name);
    eprint!("{}", format_differences(&differences));
    if config.pretty_print {
        eprintln!("{}", to_json_string(decoded.model.as_ref(), true)?);
    }
    Err(CliError::RoundTripMismatch {
        type_name: decoded.type_name.to_string(),
        count: differences.len(),
    })
}

/// Paths at which `output` differs from `input`.
///
/// Numbers compare by value, so `1` and `1.0` are equal. A discriminator
/// present only in the output is not a difference: subtype constructors
/// fill it in.
pub fn json_differences(input: &Value, output: &Value) -> Vec<String> {
    let mut differences = Vec::new();
    compare("$", input, output, &mut differences);
    differences
}

fn compare(path: &str, input: &Value, output: &Value, differences: &mut Vec<String>) {
    match (input, output) {
        (Value::Object(ours), Value::Object(theirs)) => {
            for (key, value) in ours {
                let child = format!("{}.{}", path, key);
                match theirs.get(key) {
                    Some(other) => compare(&child, value, other, differences),
                    None => differences.push(format!("{}: dropped", child)),
                }
            }
            for key in theirs.keys() {
                if !ours.contains_key(key) && key != ODATA_TYPE_WIRE_KEY {
                    differences.push(format!("{}.{}: added", path, key));
                }
            }
        }
        (Value::Array(ours), Value::Array(theirs)) => {
            if ours.len() != theirs.len() {
                differences.push(format!(
                    "{}: length {} became {}",
                    path,
                    ours.len(),
                    theirs.len()
                ));
                return;
            }
            for (index, (a, b)) in ours.iter().zip(theirs).enumerate() {
                compare(&format!("{}[{}]", path, index), a, b, differences);
            }
        }
        (Value::Number(a), Value::Number(b)) if a.as_f64() == b.as_f64() => {}
        (a, b) if a == b => {}
        (a, b) => differences.push(format!("{}: {} became {}", path, a, b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numbers_compare_by_value() {
        assert!(json_differences(&json!({"rate": 1}), &json!({"rate": 1.0})).is_empty());
    }

    #[test]
    fn test_added_discriminator_is_ignored() {
        let output = json!({"title": "x", "@odata.type": "#microsoft.graph.onenotePage"});
        assert!(json_differences(&json!({"title": "x"}), &output).is_empty());
    }

    #[test]
    fn test_reports_paths() {
        let input = json!({"query": {"queryString": "a"}, "fields": ["x", "y"], "size": 5});
        let output = json!({"query": {"queryString": "b"}, "fields": ["x"], "region": "EU"});
        assert_eq!(
            json_differences(&input, &output),
            vec![
                r#"$.query.queryString: "a" became "b""#.to_string(),
                "$.fields: length 2 became 1".to_string(),
                "$.size: dropped".to_string(),
                "$.region: added".to_string(),
            ]
        );
    }
}
