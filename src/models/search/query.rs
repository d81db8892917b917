//! Query text and alteration settings

use crate::models::odata_type_field;
use crate::serialization::{
    FieldDeserializable, FieldDeserializers, ODATA_TYPE_WIRE_KEY, Parsable, SerializationError,
    SerializationWriter, field,
};
use crate::store::ModelStore;

/// The search terms of a request
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    store: ModelStore,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self {
            store: ModelStore::new(),
        }
    }

    store_accessors! {
        /// KQL query string, e.g. `contoso AND filetype:docx`
        query_string / set_query_string: String = "queryString";
        /// Template that rewrites the query, with `{searchTerms}` standing for the query string
        query_template / set_query_template: String = "queryTemplate";
    }

    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        writer.write_string_value(ODATA_TYPE_WIRE_KEY, self.odata_type()?.as_deref())?;
        writer.write_string_value("queryString", self.query_string()?.as_deref())?;
        writer.write_string_value("queryTemplate", self.query_template()?.as_deref())?;
        Ok(())
    }
}

impl FieldDeserializable for SearchQuery {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = FieldDeserializers::new();
        fields.insert(ODATA_TYPE_WIRE_KEY, odata_type_field());
        fields.insert(
            "queryString",
            field(|m: &mut Self, n| Ok(m.set_query_string(n.get_string_value()?)?)),
        );
        fields.insert(
            "queryTemplate",
            field(|m: &mut Self, n| Ok(m.set_query_template(n.get_string_value()?)?)),
        );
        fields
    }
}

impl_parsable!(SearchQuery { store: store });

/// Spelling correction behavior of a search request
#[derive(Debug, Clone, PartialEq)]
pub struct SearchAlterationOptions {
    store: ModelStore,
}

impl SearchAlterationOptions {
    pub fn new() -> Self {
        Self {
            store: ModelStore::new(),
        }
    }

    store_accessors! {
        /// Run the corrected query when the original has no results
        enable_modification / set_enable_modification: bool = "enableModification";
        /// Return spelling suggestions for the query
        enable_suggestion / set_enable_suggestion: bool = "enableSuggestion";
    }

    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        writer.write_bool_value("enableModification", self.enable_modification()?)?;
        writer.write_bool_value("enableSuggestion", self.enable_suggestion()?)?;
        writer.write_string_value(ODATA_TYPE_WIRE_KEY, self.odata_type()?.as_deref())?;
        Ok(())
    }
}

impl FieldDeserializable for SearchAlterationOptions {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = FieldDeserializers::new();
        fields.insert(
            "enableModification",
            field(|m: &mut Self, n| Ok(m.set_enable_modification(n.get_bool_value()?)?)),
        );
        fields.insert(
            "enableSuggestion",
            field(|m: &mut Self, n| Ok(m.set_enable_suggestion(n.get_bool_value()?)?)),
        );
        fields.insert(ODATA_TYPE_WIRE_KEY, odata_type_field());
        fields
    }
}

impl_parsable!(SearchAlterationOptions { store: store });
