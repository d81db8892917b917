//! Read side of the serialization runtime

use super::{IsoDuration, ParsableFactory, SerializationError};
use chrono::{DateTime, Utc};
use std::str::FromStr;
use uuid::Uuid;

/// A node of a decoded document tree.
///
/// Scalar getters return `Ok(None)` for null and
/// `SerializationError::TypeMismatch` when the node holds a different kind
/// of value.
pub trait ParseNode {
    /// Child of an object node, or `None` when absent or not an object
    fn get_child_node(
        &self,
        name: &str,
    ) -> Result<Option<Box<dyn ParseNode + '_>>, SerializationError>;

    fn get_string_value(&self) -> Result<Option<String>, SerializationError>;

    fn get_bool_value(&self) -> Result<Option<bool>, SerializationError>;

    fn get_int32_value(&self) -> Result<Option<i32>, SerializationError>;

    fn get_int64_value(&self) -> Result<Option<i64>, SerializationError>;

    fn get_float32_value(&self) -> Result<Option<f32>, SerializationError>;

    fn get_float64_value(&self) -> Result<Option<f64>, SerializationError>;

    fn get_uuid_value(&self) -> Result<Option<Uuid>, SerializationError>;

    fn get_byte_array_value(&self) -> Result<Option<Vec<u8>>, SerializationError>;

    fn get_time_value(&self) -> Result<Option<DateTime<Utc>>, SerializationError>;

    fn get_iso_duration_value(&self) -> Result<Option<IsoDuration>, SerializationError>;

    /// Raw enum member name(s) as written on the wire
    fn get_enum_value(&self) -> Result<Option<String>, SerializationError>;

    /// Elements of an array node
    fn get_collection_nodes(
        &self,
    ) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>, SerializationError>;

    /// Members of an object node in document order
    fn get_object_entries(
        &self,
    ) -> Result<Option<Vec<(String, Box<dyn ParseNode + '_>)>>, SerializationError>;

    /// The node as an untyped JSON value, used for additional data
    fn get_raw_value(&self) -> Result<serde_json::Value, SerializationError>;

    fn is_null(&self) -> bool;
}

/// Scalar types readable through [`ParseNodeExt::get_collection_of_primitive_values`]
pub trait PrimitiveValue: Sized + Default {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError>;
}

macro_rules! primitive_value {
    ($($ty:ty => $getter:ident),* $(,)?) => {
        $(
            impl PrimitiveValue for $ty {
                fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
                    node.$getter()
                }
            }
        )*
    };
}

primitive_value! {
    String => get_string_value,
    bool => get_bool_value,
    i32 => get_int32_value,
    i64 => get_int64_value,
    f32 => get_float32_value,
    f64 => get_float64_value,
    Uuid => get_uuid_value,
    DateTime<Utc> => get_time_value,
    IsoDuration => get_iso_duration_value,
}

/// Typed reads built on top of [`ParseNode`]
pub trait ParseNodeExt {
    /// Decode a nested model, dispatching on its discriminator
    fn get_object_value<T: ParsableFactory>(&self) -> Result<Option<T>, SerializationError>;

    /// Decode an array of models; null elements are kept as `None`
    fn get_collection_of_object_values<T: ParsableFactory>(
        &self,
    ) -> Result<Option<Vec<Option<T>>>, SerializationError>;

    /// Decode an array of scalars; null elements become the default value
    fn get_collection_of_primitive_values<T: PrimitiveValue>(
        &self,
    ) -> Result<Option<Vec<T>>, SerializationError>;

    /// Decode an enum by name; unknown names yield `None`
    fn get_enum<E: FromStr>(&self) -> Result<Option<E>, SerializationError>;

    /// Decode an array of enum names, skipping unknown ones
    fn get_collection_of_enum_values<E: FromStr>(
        &self,
    ) -> Result<Option<Vec<E>>, SerializationError>;
}

impl ParseNodeExt for dyn ParseNode + '_ {
    fn get_object_value<T: ParsableFactory>(&self) -> Result<Option<T>, SerializationError> {
        if self.is_null() {
            return Ok(None);
        }
        let mut model = T::create_from_discriminator_value(self)?;
        model.deserialize_fields(self)?;
        Ok(Some(model))
    }

    fn get_collection_of_object_values<T: ParsableFactory>(
        &self,
    ) -> Result<Option<Vec<Option<T>>>, SerializationError> {
        let Some(nodes) = self.get_collection_nodes()? else {
            return Ok(None);
        };
        nodes
            .iter()
            .map(|node| node.get_object_value::<T>())
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    fn get_collection_of_primitive_values<T: PrimitiveValue>(
        &self,
    ) -> Result<Option<Vec<T>>, SerializationError> {
        let Some(nodes) = self.get_collection_nodes()? else {
            return Ok(None);
        };
        nodes
            .iter()
            .map(|node| T::read(&**node).map(Option::unwrap_or_default))
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    fn get_enum<E: FromStr>(&self) -> Result<Option<E>, SerializationError> {
        let Some(name) = self.get_enum_value()? else {
            return Ok(None);
        };
        match name.parse::<E>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                tracing::debug!(value = %name, "Ignoring unknown enum value");
                Ok(None)
            }
        }
    }

    fn get_collection_of_enum_values<E: FromStr>(
        &self,
    ) -> Result<Option<Vec<E>>, SerializationError> {
        let Some(nodes) = self.get_collection_nodes()? else {
            return Ok(None);
        };
        let mut values = Vec::with_capacity(nodes.len());
        for node in &nodes {
            if let Some(value) = node.get_enum::<E>()? {
                values.push(value);
            }
        }
        Ok(Some(values))
    }
}
