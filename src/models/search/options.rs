//! Result shaping options of a search request

use super::SearchContent;
use crate::models::odata_type_field;
use crate::serialization::{
    FieldDeserializable, FieldDeserializers, ODATA_TYPE_WIRE_KEY, Parsable, ParseNodeExt,
    SerializationError, SerializationWriter, field,
};
use crate::store::ModelStore;

#[derive(Debug, Clone, PartialEq)]
pub struct ResultTemplateOption {
    store: ModelStore,
}

impl ResultTemplateOption {
    pub fn new() -> Self {
        Self {
            store: ModelStore::new(),
        }
    }

    store_accessors! {
        /// Return result templates that render results with adaptive cards
        enable_result_template / set_enable_result_template: bool = "enableResultTemplate";
    }

    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        writer.write_bool_value("enableResultTemplate", self.enable_result_template()?)?;
        writer.write_string_value(ODATA_TYPE_WIRE_KEY, self.odata_type()?.as_deref())?;
        Ok(())
    }
}

impl FieldDeserializable for ResultTemplateOption {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = FieldDeserializers::new();
        fields.insert(
            "enableResultTemplate",
            field(|m: &mut Self, n| Ok(m.set_enable_result_template(n.get_bool_value()?)?)),
        );
        fields.insert(ODATA_TYPE_WIRE_KEY, odata_type_field());
        fields
    }
}

impl_parsable!(ResultTemplateOption { store: store });

#[derive(Debug, Clone, PartialEq)]
pub struct SharePointOneDriveOptions {
    store: ModelStore,
}

impl SharePointOneDriveOptions {
    pub fn new() -> Self {
        Self {
            store: ModelStore::new(),
        }
    }

    store_accessors! {
        /// Shared and/or private content to search
        include_content / set_include_content: SearchContent = "includeContent";
    }

    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        writer.write_enum_value(
            "includeContent",
            self.include_content()?.map(|v| v.to_string()).as_deref(),
        )?;
        writer.write_string_value(ODATA_TYPE_WIRE_KEY, self.odata_type()?.as_deref())?;
        Ok(())
    }
}

impl FieldDeserializable for SharePointOneDriveOptions {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = FieldDeserializers::new();
        fields.insert(
            "includeContent",
            field(|m: &mut Self, n| {
                if let Some(value) = n.get_enum::<SearchContent>()? {
                    m.set_include_content(Some(value))?;
                }
                Ok(())
            }),
        );
        fields.insert(ODATA_TYPE_WIRE_KEY, odata_type_field());
        fields
    }
}

impl_parsable!(SharePointOneDriveOptions { store: store });

#[derive(Debug, Clone, PartialEq)]
pub struct SortProperty {
    store: ModelStore,
}

impl SortProperty {
    pub fn new() -> Self {
        Self {
            store: ModelStore::new(),
        }
    }

    store_accessors! {
        /// Sort descending when true; ascending otherwise
        is_descending / set_is_descending: bool = "isDescending";
        /// Name of the sortable property
        name / set_name: String = "name";
    }

    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        writer.write_bool_value("isDescending", self.is_descending()?)?;
        writer.write_string_value("name", self.name()?.as_deref())?;
        writer.write_string_value(ODATA_TYPE_WIRE_KEY, self.odata_type()?.as_deref())?;
        Ok(())
    }
}

impl FieldDeserializable for SortProperty {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = FieldDeserializers::new();
        fields.insert(
            "isDescending",
            field(|m: &mut Self, n| Ok(m.set_is_descending(n.get_bool_value()?)?)),
        );
        fields.insert(
            "name",
            field(|m: &mut Self, n| Ok(m.set_name(n.get_string_value()?)?)),
        );
        fields.insert(ODATA_TYPE_WIRE_KEY, odata_type_field());
        fields
    }
}

impl_parsable!(SortProperty { store: store });

/// Groups results sharing the values of `fields`
#[derive(Debug, Clone, PartialEq)]
pub struct CollapseProperty {
    store: ModelStore,
}

impl CollapseProperty {
    pub fn new() -> Self {
        Self {
            store: ModelStore::new(),
        }
    }

    store_accessors! {
        /// Fields to collapse on
        fields / set_fields: Vec<String> = "fields";
        /// Number of results to keep per collapse group
        limit / set_limit: i32 = "limit";
    }

    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        writer.write_collection_of_string_values("fields", self.fields()?.as_deref())?;
        writer.write_int32_value("limit", self.limit()?)?;
        writer.write_string_value(ODATA_TYPE_WIRE_KEY, self.odata_type()?.as_deref())?;
        Ok(())
    }
}

impl FieldDeserializable for CollapseProperty {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = FieldDeserializers::new();
        fields.insert(
            "fields",
            field(|m: &mut Self, n| {
                Ok(m.set_fields(n.get_collection_of_primitive_values::<String>()?)?)
            }),
        );
        fields.insert(
            "limit",
            field(|m: &mut Self, n| Ok(m.set_limit(n.get_int32_value()?)?)),
        );
        fields.insert(ODATA_TYPE_WIRE_KEY, odata_type_field());
        fields
    }
}

impl_parsable!(CollapseProperty { store: store });
