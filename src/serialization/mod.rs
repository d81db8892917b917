//! Serialization runtime for Graph models
//!
//! Models are decoded from a [`ParseNode`] tree and encoded into a
//! [`SerializationWriter`]. Both abstractions are format independent; the
//! [`json`] module provides the JSON implementation.
//!
//! Decoding is table driven: each model exposes a map from wire field name
//! to a closure ([`FieldDeserializable::field_deserializers`]) and
//! [`deserialize_with`] walks the incoming object once, dispatching declared
//! fields and collecting the rest as additional data.

pub mod duration;
pub mod error;
pub mod json;
pub mod parse_node;
pub mod writer;

pub use duration::IsoDuration;
pub use error::SerializationError;
pub use parse_node::{ParseNode, ParseNodeExt, PrimitiveValue};
pub use writer::SerializationWriter;

use crate::store::{ADDITIONAL_DATA_KEY, BackingStoreExt, ModelStore, ODATA_TYPE_KEY, StoreError};
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Wire key carrying the concrete type of a polymorphic value
pub const ODATA_TYPE_WIRE_KEY: &str = "@odata.type";

/// Unknown wire fields, kept verbatim and in arrival order
pub type AdditionalData = serde_json::Map<String, serde_json::Value>;

/// A model that can be read from a [`ParseNode`] and written to a
/// [`SerializationWriter`].
///
/// The trait is object safe so writers can take `&dyn Parsable` for nested
/// values of any type.
pub trait Parsable: Debug + Send + Sync {
    /// Write declared fields followed by additional data
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError>;

    /// Populate this instance from an object node
    fn deserialize_fields(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError>;

    fn backing_store(&self) -> &ModelStore;

    fn backing_store_mut(&mut self) -> &mut ModelStore;

    /// Unknown fields captured on decode.
    ///
    /// Never absent: an instance without additional data returns an empty map.
    fn additional_data(&self) -> Result<AdditionalData, StoreError> {
        Ok(self
            .backing_store()
            .get_value::<AdditionalData>(ADDITIONAL_DATA_KEY)?
            .unwrap_or_default())
    }

    fn set_additional_data(&mut self, value: Option<AdditionalData>) -> Result<(), StoreError> {
        self.backing_store_mut().set_value(ADDITIONAL_DATA_KEY, value)
    }

    /// The `@odata.type` discriminator, if set
    fn odata_type(&self) -> Result<Option<String>, StoreError> {
        self.backing_store().get_value::<String>(ODATA_TYPE_KEY)
    }

    fn set_odata_type(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.backing_store_mut().set_value(ODATA_TYPE_KEY, value)
    }
}

/// Constructs the instance to decode into, choosing a concrete type from the
/// node's discriminator where the type is polymorphic.
///
/// Implementations only select a constructor; field population is done by
/// the caller through [`Parsable::deserialize_fields`].
pub trait ParsableFactory: Parsable + Sized {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, SerializationError>;
}

/// Closure decoding one wire field into a model
pub type FieldDeserializer<T> =
    Box<dyn Fn(&mut T, &dyn ParseNode) -> Result<(), SerializationError> + Send + Sync>;

/// Field deserializer table keyed by wire field name
pub type FieldDeserializers<T> = BTreeMap<&'static str, FieldDeserializer<T>>;

/// A model with a field deserializer table
pub trait FieldDeserializable: Parsable + Sized + 'static {
    /// The composed table: the base type's entries plus this type's own
    fn field_deserializers() -> FieldDeserializers<Self>;
}

/// Box a field closure, fixing its argument types for inference
pub fn field<T, F>(f: F) -> FieldDeserializer<T>
where
    F: Fn(&mut T, &dyn ParseNode) -> Result<(), SerializationError> + Send + Sync + 'static,
{
    Box::new(f)
}

/// Lift a base type's table onto a subtype that embeds the base
pub fn inherit_field_deserializers<B, T>(
    base: FieldDeserializers<B>,
    project: fn(&mut T) -> &mut B,
) -> FieldDeserializers<T>
where
    B: 'static,
    T: 'static,
{
    base.into_iter()
        .map(|(name, deserializer)| {
            let lifted: FieldDeserializer<T> =
                Box::new(move |model: &mut T, node: &dyn ParseNode| {
                    deserializer(project(model), node)
                });
            (name, lifted)
        })
        .collect()
}

/// Decode an object node into `model` using `table`.
///
/// Declared fields with non-null values are dispatched to their closure.
/// Undeclared fields, null or not, are stored raw as additional data. The
/// first closure error aborts the decode. A null node leaves `model` as is.
pub fn deserialize_with<T: Parsable>(
    model: &mut T,
    table: &FieldDeserializers<T>,
    node: &dyn ParseNode,
) -> Result<(), SerializationError> {
    let Some(entries) = node.get_object_entries()? else {
        return Ok(());
    };

    model.backing_store_mut().set_initialization_completed(false);
    let result = apply_entries(model, table, entries);
    model.backing_store_mut().set_initialization_completed(true);
    result
}

fn apply_entries<T: Parsable>(
    model: &mut T,
    table: &FieldDeserializers<T>,
    entries: Vec<(String, Box<dyn ParseNode + '_>)>,
) -> Result<(), SerializationError> {
    let mut additional = model.additional_data()?;
    let mut has_unknown = false;

    for (name, value) in entries {
        match table.get(name.as_str()) {
            Some(deserializer) => {
                if !value.is_null() {
                    deserializer(model, &*value)?;
                }
            }
            None => {
                additional.insert(name, value.get_raw_value()?);
                has_unknown = true;
            }
        }
    }

    if has_unknown {
        model.set_additional_data(Some(additional))?;
    }
    Ok(())
}

/// The `@odata.type` string of an object node.
///
/// Absent, null or non-string discriminators yield `None` so callers fall
/// back to the base type.
pub fn discriminator_value(node: &dyn ParseNode) -> Option<String> {
    node.get_child_node(ODATA_TYPE_WIRE_KEY)
        .ok()
        .flatten()
        .and_then(|child| child.get_string_value().ok().flatten())
}

/// Borrow an optional model as a writer argument
pub fn as_parsable<T: Parsable>(value: &Option<T>) -> Option<&dyn Parsable> {
    value.as_ref().map(|v| v as &dyn Parsable)
}

/// Borrow a model collection as writer arguments, keeping `None` elements
pub fn as_parsables<T: Parsable>(values: &[Option<T>]) -> Vec<Option<&dyn Parsable>> {
    values
        .iter()
        .map(|v| v.as_ref().map(|v| v as &dyn Parsable))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::json::JsonParseNode;
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Probe {
        store: ModelStore,
    }

    impl Probe {
        fn name(&self) -> Result<Option<String>, StoreError> {
            self.store.get_value("name")
        }
    }

    impl Parsable for Probe {
        fn serialize(
            &self,
            writer: &mut dyn SerializationWriter,
        ) -> Result<(), SerializationError> {
            writer.write_string_value("name", self.name()?.as_deref())?;
            writer.write_additional_data(&self.additional_data()?)
        }

        fn deserialize_fields(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
            deserialize_with(self, &Self::field_deserializers(), node)
        }

        fn backing_store(&self) -> &ModelStore {
            &self.store
        }

        fn backing_store_mut(&mut self) -> &mut ModelStore {
            &mut self.store
        }
    }

    impl FieldDeserializable for Probe {
        fn field_deserializers() -> FieldDeserializers<Self> {
            let mut table = FieldDeserializers::new();
            table.insert(
                "name",
                field(|m: &mut Self, n| {
                    m.store.set_value("name", n.get_string_value()?)?;
                    Ok(())
                }),
            );
            table
        }
    }

    #[derive(Debug, Default)]
    struct Wrapper {
        inner: Probe,
    }

    #[test]
    fn test_unknown_fields_go_to_additional_data() {
        let value = json!({"name": "a", "extra": 1, "gone": null});
        let mut probe = Probe::default();
        deserialize_with(&mut probe, &Probe::field_deserializers(), &JsonParseNode::new(&value))
            .unwrap();

        assert_eq!(probe.name().unwrap().as_deref(), Some("a"));
        let extra = probe.additional_data().unwrap();
        assert_eq!(extra.get("extra"), Some(&json!(1)));
        assert_eq!(extra.get("gone"), Some(&serde_json::Value::Null));
    }

    #[test]
    fn test_declared_null_is_skipped() {
        let value = json!({"name": null});
        let mut probe = Probe::default();
        deserialize_with(&mut probe, &Probe::field_deserializers(), &JsonParseNode::new(&value))
            .unwrap();
        assert_eq!(probe.name().unwrap(), None);
        assert!(probe.additional_data().unwrap().is_empty());
    }

    #[test]
    fn test_first_error_aborts() {
        let value = json!({"name": 5});
        let mut probe = Probe::default();
        let err = deserialize_with(
            &mut probe,
            &Probe::field_deserializers(),
            &JsonParseNode::new(&value),
        )
        .unwrap_err();
        assert!(matches!(err, SerializationError::TypeMismatch { .. }));
        assert!(probe.backing_store().initialization_completed());
    }

    #[test]
    fn test_decoded_values_are_not_marked_changed() {
        let value = json!({"name": "a"});
        let mut probe = Probe::default();
        deserialize_with(&mut probe, &Probe::field_deserializers(), &JsonParseNode::new(&value))
            .unwrap();
        probe.store.set_return_only_changed_values(true);
        assert_eq!(probe.name().unwrap(), None);
    }

    #[test]
    fn test_inherited_table_targets_embedded_base() {
        let table: FieldDeserializers<Wrapper> =
            inherit_field_deserializers(Probe::field_deserializers(), |w: &mut Wrapper| {
                &mut w.inner
            });
        let value = json!("b");
        let mut wrapper = Wrapper::default();
        let deserializer = table.get("name").unwrap();
        deserializer(&mut wrapper, &JsonParseNode::new(&value)).unwrap();
        assert_eq!(wrapper.inner.name().unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn test_discriminator_value() {
        let typed = json!({"@odata.type": "#microsoft.graph.entity"});
        let numeric = json!({"@odata.type": 7});
        let missing = json!({});
        assert_eq!(
            discriminator_value(&JsonParseNode::new(&typed)).as_deref(),
            Some("#microsoft.graph.entity")
        );
        assert_eq!(discriminator_value(&JsonParseNode::new(&numeric)), None);
        assert_eq!(discriminator_value(&JsonParseNode::new(&missing)), None);
    }
}
