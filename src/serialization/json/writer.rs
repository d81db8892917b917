//! JSON serialization writer

use crate::serialization::{
    AdditionalData, IsoDuration, Parsable, SerializationError, SerializationWriter,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Number, Value};
use uuid::Uuid;

/// [`SerializationWriter`] building a `serde_json::Value`.
///
/// Nested objects are written on a stack of open maps; members keep the
/// order in which they were written.
#[derive(Debug)]
pub struct JsonSerializationWriter {
    stack: Vec<Map<String, Value>>,
}

impl JsonSerializationWriter {
    pub fn new() -> Self {
        Self {
            stack: vec![Map::new()],
        }
    }

    /// Finish writing and return the root object
    pub fn into_value(mut self) -> Result<Value, SerializationError> {
        if self.stack.len() != 1 {
            return Err(SerializationError::Writer(format!(
                "{} nested objects left open",
                self.stack.len().saturating_sub(1)
            )));
        }
        self.stack
            .pop()
            .map(Value::Object)
            .ok_or_else(|| SerializationError::Writer("no root object".to_string()))
    }

    fn insert(&mut self, key: &str, value: Value) -> Result<(), SerializationError> {
        let current = self
            .stack
            .last_mut()
            .ok_or_else(|| SerializationError::Writer("no open object".to_string()))?;
        current.insert(key.to_string(), value);
        Ok(())
    }

    fn nested(&mut self, value: &dyn Parsable) -> Result<Value, SerializationError> {
        self.stack.push(Map::new());
        let result = value.serialize(self);
        let map = self
            .stack
            .pop()
            .ok_or_else(|| SerializationError::Writer("object stack underflow".to_string()))?;
        result?;
        Ok(Value::Object(map))
    }

    fn number(kind: &'static str, value: f64) -> Result<Value, SerializationError> {
        Number::from_f64(value)
            .map(Value::Number)
            .ok_or_else(|| SerializationError::InvalidValue {
                kind,
                value: value.to_string(),
            })
    }
}

impl Default for JsonSerializationWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SerializationWriter for JsonSerializationWriter {
    fn write_string_value(
        &mut self,
        key: &str,
        value: Option<&str>,
    ) -> Result<(), SerializationError> {
        match value {
            Some(v) => self.insert(key, Value::String(v.to_string())),
            None => Ok(()),
        }
    }

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<(), SerializationError> {
        match value {
            Some(v) => self.insert(key, Value::Bool(v)),
            None => Ok(()),
        }
    }

    fn write_int32_value(&mut self, key: &str, value: Option<i32>) -> Result<(), SerializationError> {
        match value {
            Some(v) => self.insert(key, Value::from(v)),
            None => Ok(()),
        }
    }

    fn write_int64_value(&mut self, key: &str, value: Option<i64>) -> Result<(), SerializationError> {
        match value {
            Some(v) => self.insert(key, Value::from(v)),
            None => Ok(()),
        }
    }

    fn write_float32_value(
        &mut self,
        key: &str,
        value: Option<f32>,
    ) -> Result<(), SerializationError> {
        let Some(v) = value else {
            return Ok(());
        };
        // Go through the shortest decimal form so 0.1f32 is written as 0.1.
        let widened = v.to_string().parse::<f64>().unwrap_or(f64::from(v));
        let number = Self::number("float32", widened)?;
        self.insert(key, number)
    }

    fn write_float64_value(
        &mut self,
        key: &str,
        value: Option<f64>,
    ) -> Result<(), SerializationError> {
        let Some(v) = value else {
            return Ok(());
        };
        let number = Self::number("float64", v)?;
        self.insert(key, number)
    }

    fn write_uuid_value(&mut self, key: &str, value: Option<Uuid>) -> Result<(), SerializationError> {
        match value {
            Some(v) => self.insert(key, Value::String(v.to_string())),
            None => Ok(()),
        }
    }

    fn write_byte_array_value(
        &mut self,
        key: &str,
        value: Option<&[u8]>,
    ) -> Result<(), SerializationError> {
        match value {
            Some(v) => self.insert(key, Value::String(STANDARD.encode(v))),
            None => Ok(()),
        }
    }

    fn write_time_value(
        &mut self,
        key: &str,
        value: Option<DateTime<Utc>>,
    ) -> Result<(), SerializationError> {
        match value {
            Some(v) => self.insert(
                key,
                Value::String(v.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            ),
            None => Ok(()),
        }
    }

    fn write_iso_duration_value(
        &mut self,
        key: &str,
        value: Option<IsoDuration>,
    ) -> Result<(), SerializationError> {
        match value {
            Some(v) => self.insert(key, Value::String(v.to_string())),
            None => Ok(()),
        }
    }

    fn write_collection_of_string_values(
        &mut self,
        key: &str,
        values: Option<&[String]>,
    ) -> Result<(), SerializationError> {
        match values {
            Some(v) => self.insert(
                key,
                Value::Array(v.iter().cloned().map(Value::String).collect()),
            ),
            None => Ok(()),
        }
    }

    fn write_collection_of_int32_values(
        &mut self,
        key: &str,
        values: Option<&[i32]>,
    ) -> Result<(), SerializationError> {
        match values {
            Some(v) => self.insert(key, Value::Array(v.iter().copied().map(Value::from).collect())),
            None => Ok(()),
        }
    }

    fn write_object_value(
        &mut self,
        key: &str,
        value: Option<&dyn Parsable>,
    ) -> Result<(), SerializationError> {
        let Some(value) = value else {
            return Ok(());
        };
        let object = self.nested(value)?;
        self.insert(key, object)
    }

    fn write_collection_of_object_values(
        &mut self,
        key: &str,
        values: Option<&[Option<&dyn Parsable>]>,
    ) -> Result<(), SerializationError> {
        let Some(values) = values else {
            return Ok(());
        };
        let mut items = Vec::with_capacity(values.len());
        for value in values {
            items.push(match value {
                Some(model) => self.nested(*model)?,
                None => Value::Null,
            });
        }
        self.insert(key, Value::Array(items))
    }

    fn write_null_value(&mut self, key: &str) -> Result<(), SerializationError> {
        self.insert(key, Value::Null)
    }

    fn write_additional_data(&mut self, data: &AdditionalData) -> Result<(), SerializationError> {
        for (key, value) in data {
            self.insert(key, value.clone())?;
        }
        Ok(())
    }
}
