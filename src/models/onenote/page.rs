//! OneNote page

use super::{OnenoteEntitySchemaObjectModel, PageLinks};
use crate::models::preset_odata_type;
use crate::serialization::{
    FieldDeserializable, FieldDeserializers, ParseNodeExt, SerializationError,
    SerializationWriter, as_parsable, field, inherit_field_deserializers,
};
use chrono::{DateTime, Utc};

pub(crate) const ONENOTE_PAGE_TYPE: &str = "#microsoft.graph.onenotePage";

/// A page in a OneNote section
#[derive(Debug, Clone, PartialEq)]
pub struct OnenotePage {
    base: OnenoteEntitySchemaObjectModel,
}

impl OnenotePage {
    pub fn new() -> Self {
        let mut page = Self {
            base: OnenoteEntitySchemaObjectModel::new(),
        };
        preset_odata_type(&mut page, ONENOTE_PAGE_TYPE);
        page
    }

    store_accessors! {
        /// The page's HTML content
        content / set_content: Vec<u8> = "content";
        /// The URL for the page's HTML content. Read-only.
        content_url / set_content_url: String = "contentUrl";
        /// The unique identifier of the application that created the page. Read-only.
        created_by_app_id / set_created_by_app_id: String = "createdByAppId";
        last_modified_date_time / set_last_modified_date_time: DateTime<Utc> = "lastModifiedDateTime";
        /// The indentation level of the page. Read-only.
        level / set_level: i32 = "level";
        links / set_links: PageLinks = "links";
        /// The order of the page within its parent section. Read-only.
        order / set_order: i32 = "order";
        title / set_title: String = "title";
        user_tags / set_user_tags: Vec<String> = "userTags";
    }

    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        self.base.write_fields(writer)?;
        writer.write_byte_array_value("content", self.content()?.as_deref())?;
        writer.write_string_value("contentUrl", self.content_url()?.as_deref())?;
        writer.write_string_value("createdByAppId", self.created_by_app_id()?.as_deref())?;
        writer.write_time_value("lastModifiedDateTime", self.last_modified_date_time()?)?;
        writer.write_int32_value("level", self.level()?)?;
        writer.write_object_value("links", as_parsable(&self.links()?))?;
        writer.write_int32_value("order", self.order()?)?;
        writer.write_string_value("title", self.title()?.as_deref())?;
        writer.write_collection_of_string_values("userTags", self.user_tags()?.as_deref())?;
        Ok(())
    }
}

impl FieldDeserializable for OnenotePage {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = inherit_field_deserializers(
            OnenoteEntitySchemaObjectModel::field_deserializers(),
            |m: &mut Self| &mut m.base,
        );
        fields.insert(
            "content",
            field(|m: &mut Self, n| Ok(m.set_content(n.get_byte_array_value()?)?)),
        );
        fields.insert(
            "contentUrl",
            field(|m: &mut Self, n| Ok(m.set_content_url(n.get_string_value()?)?)),
        );
        fields.insert(
            "createdByAppId",
            field(|m: &mut Self, n| Ok(m.set_created_by_app_id(n.get_string_value()?)?)),
        );
        fields.insert(
            "lastModifiedDateTime",
            field(|m: &mut Self, n| Ok(m.set_last_modified_date_time(n.get_time_value()?)?)),
        );
        fields.insert(
            "level",
            field(|m: &mut Self, n| Ok(m.set_level(n.get_int32_value()?)?)),
        );
        fields.insert(
            "links",
            field(|m: &mut Self, n| Ok(m.set_links(n.get_object_value::<PageLinks>()?)?)),
        );
        fields.insert(
            "order",
            field(|m: &mut Self, n| Ok(m.set_order(n.get_int32_value()?)?)),
        );
        fields.insert(
            "title",
            field(|m: &mut Self, n| Ok(m.set_title(n.get_string_value()?)?)),
        );
        fields.insert(
            "userTags",
            field(|m: &mut Self, n| {
                Ok(m.set_user_tags(n.get_collection_of_primitive_values::<String>()?)?)
            }),
        );
        fields
    }
}

impl_parsable!(OnenotePage { base: base });
derive_base!(OnenotePage => OnenoteEntitySchemaObjectModel);
