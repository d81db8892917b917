//! JSON codec
//!
//! Decoding borrows a parsed `serde_json::Value`; encoding builds one and
//! renders it with `serde_json`. Member order on output is the order in
//! which the model wrote its fields.

pub mod parse_node;
pub mod writer;

pub use parse_node::JsonParseNode;
pub use writer::JsonSerializationWriter;

use super::{Parsable, ParsableFactory, ParseNode, ParseNodeExt, SerializationError};
use serde_json::Value;

/// Decode a model from a JSON value
pub fn from_json_value<T: ParsableFactory>(value: &Value) -> Result<T, SerializationError> {
    let node = JsonParseNode::new(value);
    let node: &dyn ParseNode = &node;
    node.get_object_value::<T>()?
        .ok_or_else(|| SerializationError::TypeMismatch {
            expected: "object",
            found: parse_node::json_kind(value).to_string(),
        })
}

/// Decode a model from JSON text
pub fn from_json_str<T: ParsableFactory>(json: &str) -> Result<T, SerializationError> {
    let value: Value = serde_json::from_str(json)?;
    from_json_value(&value)
}

/// Decode a model from JSON bytes
pub fn from_json_slice<T: ParsableFactory>(json: &[u8]) -> Result<T, SerializationError> {
    let value: Value = serde_json::from_slice(json)?;
    from_json_value(&value)
}

/// Encode a model as a JSON value
pub fn to_json_value(model: &dyn Parsable) -> Result<Value, SerializationError> {
    let mut writer = JsonSerializationWriter::new();
    model.serialize(&mut writer)?;
    writer.into_value()
}

/// Encode a model as JSON text
pub fn to_json_string(model: &dyn Parsable, pretty: bool) -> Result<String, SerializationError> {
    let value = to_json_value(model)?;
    let text = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    text.map_err(|e| SerializationError::Writer(e.to_string()))
}
