//! JSON parse node

use crate::serialization::{IsoDuration, ParseNode, SerializationError};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

/// [`ParseNode`] over a borrowed `serde_json::Value`
#[derive(Debug, Clone, Copy)]
pub struct JsonParseNode<'a> {
    value: &'a Value,
}

impl<'a> JsonParseNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    fn mismatch(&self, expected: &'static str) -> SerializationError {
        SerializationError::TypeMismatch {
            expected,
            found: json_kind(self.value).to_string(),
        }
    }

    fn string(&self, expected: &'static str) -> Result<Option<&'a str>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.as_str())),
            _ => Err(self.mismatch(expected)),
        }
    }

    fn integer(&self, expected: &'static str) -> Result<Option<i64>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => n.as_i64().map(Some).ok_or_else(|| {
                SerializationError::InvalidValue {
                    kind: expected,
                    value: n.to_string(),
                }
            }),
            _ => Err(self.mismatch(expected)),
        }
    }

    fn boxed(value: &'a Value) -> Box<dyn ParseNode + 'a> {
        Box::new(JsonParseNode::new(value))
    }
}

/// JSON type name used in error messages
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn parse_time(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    // Some services omit the offset; those timestamps are UTC.
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

impl ParseNode for JsonParseNode<'_> {
    fn get_child_node(
        &self,
        name: &str,
    ) -> Result<Option<Box<dyn ParseNode + '_>>, SerializationError> {
        Ok(self
            .value
            .as_object()
            .and_then(|members| members.get(name))
            .map(Self::boxed))
    }

    fn get_string_value(&self) -> Result<Option<String>, SerializationError> {
        Ok(self.string("string")?.map(str::to_string))
    }

    fn get_bool_value(&self) -> Result<Option<bool>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(*b)),
            _ => Err(self.mismatch("boolean")),
        }
    }

    fn get_int32_value(&self) -> Result<Option<i32>, SerializationError> {
        self.integer("int32")?
            .map(|n| {
                i32::try_from(n).map_err(|_| SerializationError::InvalidValue {
                    kind: "int32",
                    value: n.to_string(),
                })
            })
            .transpose()
    }

    fn get_int64_value(&self) -> Result<Option<i64>, SerializationError> {
        self.integer("int64")
    }

    fn get_float32_value(&self) -> Result<Option<f32>, SerializationError> {
        self.get_float64_value()?
            .map(|n| {
                let narrowed = n as f32;
                if n.is_finite() && !narrowed.is_finite() {
                    return Err(SerializationError::InvalidValue {
                        kind: "float32",
                        value: n.to_string(),
                    });
                }
                Ok(narrowed)
            })
            .transpose()
    }

    fn get_float64_value(&self) -> Result<Option<f64>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => n.as_f64().map(Some).ok_or_else(|| {
                SerializationError::InvalidValue {
                    kind: "float",
                    value: n.to_string(),
                }
            }),
            _ => Err(self.mismatch("number")),
        }
    }

    fn get_uuid_value(&self) -> Result<Option<Uuid>, SerializationError> {
        self.string("uuid")?
            .map(|s| {
                Uuid::parse_str(s).map_err(|_| SerializationError::InvalidValue {
                    kind: "uuid",
                    value: s.to_string(),
                })
            })
            .transpose()
    }

    fn get_byte_array_value(&self) -> Result<Option<Vec<u8>>, SerializationError> {
        self.string("base64 string")?
            .map(|s| {
                STANDARD
                    .decode(s)
                    .map_err(|_| SerializationError::InvalidValue {
                        kind: "base64",
                        value: s.to_string(),
                    })
            })
            .transpose()
    }

    fn get_time_value(&self) -> Result<Option<DateTime<Utc>>, SerializationError> {
        self.string("timestamp")?
            .map(|s| {
                parse_time(s).ok_or_else(|| SerializationError::InvalidValue {
                    kind: "timestamp",
                    value: s.to_string(),
                })
            })
            .transpose()
    }

    fn get_iso_duration_value(&self) -> Result<Option<IsoDuration>, SerializationError> {
        self.string("duration")?
            .map(str::parse::<IsoDuration>)
            .transpose()
    }

    fn get_enum_value(&self) -> Result<Option<String>, SerializationError> {
        Ok(self.string("enum name")?.map(str::to_string))
    }

    fn get_collection_nodes(
        &self,
    ) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Array(items) => Ok(Some(items.iter().map(Self::boxed).collect())),
            _ => Err(self.mismatch("array")),
        }
    }

    fn get_object_entries(
        &self,
    ) -> Result<Option<Vec<(String, Box<dyn ParseNode + '_>)>>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Object(members) => Ok(Some(
                members
                    .iter()
                    .map(|(name, value)| (name.clone(), Self::boxed(value)))
                    .collect(),
            )),
            _ => Err(self.mismatch("object")),
        }
    }

    fn get_raw_value(&self) -> Result<Value, SerializationError> {
        Ok(self.value.clone())
    }

    fn is_null(&self) -> bool {
        self.value.is_null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::ParseNodeExt;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        let value = json!({
            "s": "text",
            "b": true,
            "i": -12,
            "f": 1.5,
            "u": "6f9619ff-8b86-d011-b42d-00c04fc964ff",
            "bytes": "aGVsbG8=",
            "t": "2024-03-01T10:15:00+02:00",
            "d": "PT1M"
        });
        let node = JsonParseNode::new(&value);
        let child = |name: &str| node.get_child_node(name).unwrap().unwrap();

        assert_eq!(child("s").get_string_value().unwrap().as_deref(), Some("text"));
        assert_eq!(child("b").get_bool_value().unwrap(), Some(true));
        assert_eq!(child("i").get_int32_value().unwrap(), Some(-12));
        assert_eq!(child("f").get_float64_value().unwrap(), Some(1.5));
        assert_eq!(
            child("u").get_uuid_value().unwrap().map(|u| u.to_string()).as_deref(),
            Some("6f9619ff-8b86-d011-b42d-00c04fc964ff")
        );
        assert_eq!(child("bytes").get_byte_array_value().unwrap(), Some(b"hello".to_vec()));
        assert_eq!(
            child("t").get_time_value().unwrap().map(|t| t.to_rfc3339()),
            Some("2024-03-01T08:15:00+00:00".to_string())
        );
        assert_eq!(
            child("d").get_iso_duration_value().unwrap(),
            Some(IsoDuration::from_hms(0, 1, 0))
        );
    }

    #[test]
    fn test_timestamp_without_offset_is_utc() {
        let value = json!("2024-03-01T10:15:00.5");
        let time = JsonParseNode::new(&value).get_time_value().unwrap().unwrap();
        assert_eq!(time.to_rfc3339(), "2024-03-01T10:15:00.500+00:00");
    }

    #[test]
    fn test_null_reads_as_none() {
        let value = Value::Null;
        let node = JsonParseNode::new(&value);
        assert!(node.is_null());
        assert_eq!(node.get_string_value().unwrap(), None);
        assert_eq!(node.get_int64_value().unwrap(), None);
        assert!(node.get_object_entries().unwrap().is_none());
    }

    #[test]
    fn test_wrong_type_is_mismatch() {
        let value = json!("10");
        let err = JsonParseNode::new(&value).get_int32_value().unwrap_err();
        assert!(matches!(
            err,
            SerializationError::TypeMismatch { expected: "int32", ref found } if found == "string"
        ));
    }

    #[test]
    fn test_int32_overflow_is_invalid() {
        let value = json!(4_294_967_296_i64);
        let err = JsonParseNode::new(&value).get_int32_value().unwrap_err();
        assert!(matches!(err, SerializationError::InvalidValue { kind: "int32", .. }));
    }

    #[test]
    fn test_float32_out_of_range_is_invalid() {
        let value = json!(1e40);
        let err = JsonParseNode::new(&value).get_float32_value().unwrap_err();
        assert!(matches!(err, SerializationError::InvalidValue { kind: "float32", .. }));

        let value = json!(f64::from(f32::MAX));
        assert_eq!(JsonParseNode::new(&value).get_float32_value().unwrap(), Some(f32::MAX));
    }

    #[test]
    fn test_invalid_base64() {
        let value = json!("not base64!");
        assert!(JsonParseNode::new(&value).get_byte_array_value().is_err());
    }

    #[test]
    fn test_object_entries_keep_document_order() {
        let value = json!({"zeta": 1, "alpha": 2});
        let node = JsonParseNode::new(&value);
        let names: Vec<String> = node
            .get_object_entries()
            .unwrap()
            .unwrap()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_primitive_collection_nulls_become_default() {
        let value = json!(["a", null, "c"]);
        let node = JsonParseNode::new(&value);
        let node: &dyn ParseNode = &node;
        let values: Vec<String> = node.get_collection_of_primitive_values().unwrap().unwrap();
        assert_eq!(values, vec!["a", "", "c"]);
    }
}
