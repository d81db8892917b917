//! Base entity type

use super::odata_type_field;
use super::{
    OnenoteEntityBaseModel, OnenoteEntitySchemaObjectModel, OnenotePage, OrganizationalBranding,
    OrganizationalBrandingLocalization, OrganizationalBrandingProperties,
};
use crate::serialization::{
    FieldDeserializable, FieldDeserializers, ODATA_TYPE_WIRE_KEY, Parsable, SerializationError,
    SerializationWriter, field,
};
use crate::store::ModelStore;

/// Root of every addressable Graph resource.
///
/// Owns the backing store; subtypes reach it through their embedded base.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    store: ModelStore,
}

impl Entity {
    pub fn new() -> Self {
        Self {
            store: ModelStore::new(),
        }
    }

    store_accessors! {
        /// The unique identifier for an entity. Read-only.
        id / set_id: String = "id";
    }

    /// Write the fields declared by this type
    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        writer.write_string_value("id", self.id()?.as_deref())?;
        writer.write_string_value(ODATA_TYPE_WIRE_KEY, self.odata_type()?.as_deref())?;
        Ok(())
    }
}

impl FieldDeserializable for Entity {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = FieldDeserializers::new();
        fields.insert(
            "id",
            field(|m: &mut Self, n| Ok(m.set_id(n.get_string_value()?)?)),
        );
        fields.insert(ODATA_TYPE_WIRE_KEY, odata_type_field());
        fields
    }
}

impl_parsable!(Entity { store: store });

discriminated_family! {
    /// Any entity, resolved to its concrete type by `@odata.type`
    pub enum EntityKind {
        base Entity(Entity),
        "#microsoft.graph.onenoteEntityBaseModel" => OnenoteEntityBaseModel(OnenoteEntityBaseModel),
        "#microsoft.graph.onenoteEntitySchemaObjectModel" => OnenoteEntitySchemaObjectModel(OnenoteEntitySchemaObjectModel),
        "#microsoft.graph.onenotePage" => OnenotePage(OnenotePage),
        "#microsoft.graph.organizationalBranding" => OrganizationalBranding(OrganizationalBranding),
        "#microsoft.graph.organizationalBrandingLocalization" => OrganizationalBrandingLocalization(OrganizationalBrandingLocalization),
        "#microsoft.graph.organizationalBrandingProperties" => OrganizationalBrandingProperties(OrganizationalBrandingProperties),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::json::{from_json_str, to_json_value};
    use serde_json::json;

    #[test]
    fn test_new_entity_is_empty() {
        let entity = Entity::new();
        assert_eq!(entity.id().unwrap(), None);
        assert_eq!(entity.odata_type().unwrap(), None);
        assert!(entity.additional_data().unwrap().is_empty());
    }

    #[test]
    fn test_write_fields_order() {
        let mut entity = Entity::new();
        entity.set_odata_type(Some("#microsoft.graph.entity".to_string())).unwrap();
        entity.set_id(Some("42".to_string())).unwrap();
        let text = serde_json::to_string(&to_json_value(&entity).unwrap()).unwrap();
        assert_eq!(text, r##"{"id":"42","@odata.type":"#microsoft.graph.entity"}"##);
    }

    #[test]
    fn test_kind_dispatch() {
        let kind: EntityKind =
            from_json_str(r##"{"@odata.type":"#microsoft.graph.onenotePage","title":"Notes"}"##)
                .unwrap();
        match kind {
            EntityKind::OnenotePage(page) => {
                assert_eq!(page.title().unwrap().as_deref(), Some("Notes"));
            }
            other => panic!("expected OnenotePage, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_kind_fallback() {
        let kind: EntityKind =
            from_json_str(r##"{"@odata.type":"#microsoft.graph.user","id":"1"}"##).unwrap();
        assert!(matches!(kind, EntityKind::Entity(_)));
        assert_eq!(
            to_json_value(&kind).unwrap(),
            json!({"id": "1", "@odata.type": "#microsoft.graph.user"})
        );
    }
}
