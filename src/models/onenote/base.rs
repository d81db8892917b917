//! Abstract OneNote entity bases

use crate::models::Entity;
use crate::serialization::{
    FieldDeserializable, FieldDeserializers, SerializationError, SerializationWriter, field,
    inherit_field_deserializers,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct OnenoteEntityBaseModel {
    base: Entity,
}

impl OnenoteEntityBaseModel {
    pub fn new() -> Self {
        Self {
            base: Entity::new(),
        }
    }

    store_accessors! {
        /// Endpoint where details about the entity can be fetched (wire name `self`)
        self_link / set_self_link: String = "self";
    }

    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        self.base.write_fields(writer)?;
        writer.write_string_value("self", self.self_link()?.as_deref())?;
        Ok(())
    }
}

impl FieldDeserializable for OnenoteEntityBaseModel {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = inherit_field_deserializers(Entity::field_deserializers(), |m: &mut Self| {
            &mut m.base
        });
        fields.insert(
            "self",
            field(|m: &mut Self, n| Ok(m.set_self_link(n.get_string_value()?)?)),
        );
        fields
    }
}

impl_parsable!(OnenoteEntityBaseModel { base: base });
derive_base!(OnenoteEntityBaseModel => Entity);

#[derive(Debug, Clone, PartialEq)]
pub struct OnenoteEntitySchemaObjectModel {
    base: OnenoteEntityBaseModel,
}

impl OnenoteEntitySchemaObjectModel {
    pub fn new() -> Self {
        Self {
            base: OnenoteEntityBaseModel::new(),
        }
    }

    store_accessors! {
        /// Creation time in UTC
        created_date_time / set_created_date_time: DateTime<Utc> = "createdDateTime";
    }

    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        self.base.write_fields(writer)?;
        writer.write_time_value("createdDateTime", self.created_date_time()?)?;
        Ok(())
    }
}

impl FieldDeserializable for OnenoteEntitySchemaObjectModel {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = inherit_field_deserializers(
            OnenoteEntityBaseModel::field_deserializers(),
            |m: &mut Self| &mut m.base,
        );
        fields.insert(
            "createdDateTime",
            field(|m: &mut Self, n| Ok(m.set_created_date_time(n.get_time_value()?)?)),
        );
        fields
    }
}

impl_parsable!(OnenoteEntitySchemaObjectModel { base: base });
derive_base!(OnenoteEntitySchemaObjectModel => OnenoteEntityBaseModel);
