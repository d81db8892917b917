//! Links used to open a OneNote page

use crate::models::odata_type_field;
use crate::serialization::{
    FieldDeserializable, FieldDeserializers, ODATA_TYPE_WIRE_KEY, Parsable, ParseNodeExt,
    SerializationError, SerializationWriter, as_parsable, field,
};
use crate::store::ModelStore;

#[derive(Debug, Clone, PartialEq)]
pub struct ExternalLink {
    store: ModelStore,
}

impl ExternalLink {
    pub fn new() -> Self {
        Self {
            store: ModelStore::new(),
        }
    }

    store_accessors! {
        /// The URL of the link
        href / set_href: String = "href";
    }

    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        writer.write_string_value("href", self.href()?.as_deref())?;
        writer.write_string_value(ODATA_TYPE_WIRE_KEY, self.odata_type()?.as_deref())?;
        Ok(())
    }
}

impl FieldDeserializable for ExternalLink {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = FieldDeserializers::new();
        fields.insert(
            "href",
            field(|m: &mut Self, n| Ok(m.set_href(n.get_string_value()?)?)),
        );
        fields.insert(ODATA_TYPE_WIRE_KEY, odata_type_field());
        fields
    }
}

impl_parsable!(ExternalLink { store: store });

#[derive(Debug, Clone, PartialEq)]
pub struct PageLinks {
    store: ModelStore,
}

impl PageLinks {
    pub fn new() -> Self {
        Self {
            store: ModelStore::new(),
        }
    }

    store_accessors! {
        /// Opens the page in the OneNote native client if it's installed
        one_note_client_url / set_one_note_client_url: ExternalLink = "oneNoteClientUrl";
        /// Opens the page in OneNote on the web
        one_note_web_url / set_one_note_web_url: ExternalLink = "oneNoteWebUrl";
    }

    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        writer.write_string_value(ODATA_TYPE_WIRE_KEY, self.odata_type()?.as_deref())?;
        writer.write_object_value("oneNoteClientUrl", as_parsable(&self.one_note_client_url()?))?;
        writer.write_object_value("oneNoteWebUrl", as_parsable(&self.one_note_web_url()?))?;
        Ok(())
    }
}

impl FieldDeserializable for PageLinks {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = FieldDeserializers::new();
        fields.insert(ODATA_TYPE_WIRE_KEY, odata_type_field());
        fields.insert(
            "oneNoteClientUrl",
            field(|m: &mut Self, n| {
                Ok(m.set_one_note_client_url(n.get_object_value::<ExternalLink>()?)?)
            }),
        );
        fields.insert(
            "oneNoteWebUrl",
            field(|m: &mut Self, n| Ok(m.set_one_note_web_url(n.get_object_value::<ExternalLink>()?)?)),
        );
        fields
    }
}

impl_parsable!(PageLinks { store: store });
