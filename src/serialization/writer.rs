//! Write side of the serialization runtime

use super::{AdditionalData, IsoDuration, Parsable, SerializationError};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Sink for serialized model fields.
///
/// Every `write_*` call with a `None` value writes nothing, so models can
/// pass their getters through unconditionally. Use
/// [`SerializationWriter::write_null_value`] to emit an explicit null.
pub trait SerializationWriter {
    fn write_string_value(&mut self, key: &str, value: Option<&str>)
    -> Result<(), SerializationError>;

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<(), SerializationError>;

    fn write_int32_value(&mut self, key: &str, value: Option<i32>) -> Result<(), SerializationError>;

    fn write_int64_value(&mut self, key: &str, value: Option<i64>) -> Result<(), SerializationError>;

    fn write_float32_value(&mut self, key: &str, value: Option<f32>)
    -> Result<(), SerializationError>;

    fn write_float64_value(&mut self, key: &str, value: Option<f64>)
    -> Result<(), SerializationError>;

    fn write_uuid_value(&mut self, key: &str, value: Option<Uuid>) -> Result<(), SerializationError>;

    fn write_byte_array_value(
        &mut self,
        key: &str,
        value: Option<&[u8]>,
    ) -> Result<(), SerializationError>;

    fn write_time_value(
        &mut self,
        key: &str,
        value: Option<DateTime<Utc>>,
    ) -> Result<(), SerializationError>;

    fn write_iso_duration_value(
        &mut self,
        key: &str,
        value: Option<IsoDuration>,
    ) -> Result<(), SerializationError>;

    /// Write an enum by member name
    fn write_enum_value(&mut self, key: &str, value: Option<&str>) -> Result<(), SerializationError> {
        self.write_string_value(key, value)
    }

    fn write_collection_of_string_values(
        &mut self,
        key: &str,
        values: Option<&[String]>,
    ) -> Result<(), SerializationError>;

    fn write_collection_of_int32_values(
        &mut self,
        key: &str,
        values: Option<&[i32]>,
    ) -> Result<(), SerializationError>;

    /// Write a nested model by calling its [`Parsable::serialize`]
    fn write_object_value(
        &mut self,
        key: &str,
        value: Option<&dyn Parsable>,
    ) -> Result<(), SerializationError>;

    /// Write an array of models; `None` elements are written as null
    fn write_collection_of_object_values(
        &mut self,
        key: &str,
        values: Option<&[Option<&dyn Parsable>]>,
    ) -> Result<(), SerializationError>;

    fn write_null_value(&mut self, key: &str) -> Result<(), SerializationError>;

    /// Write unknown fields verbatim as trailing members
    fn write_additional_data(&mut self, data: &AdditionalData) -> Result<(), SerializationError>;
}

/// Wire names of an enum collection
pub fn enum_names<E: ToString>(values: &[E]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}
