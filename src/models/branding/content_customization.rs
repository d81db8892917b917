//! Text overrides for the external-tenant authentication flow

use crate::models::odata_type_field;
use crate::serialization::{
    FieldDeserializable, FieldDeserializers, ODATA_TYPE_WIRE_KEY, Parsable, ParseNodeExt,
    SerializationError, SerializationWriter, as_parsables, field,
};
use crate::store::ModelStore;

/// A single string key/value pair
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValue {
    store: ModelStore,
}

impl KeyValue {
    pub fn new() -> Self {
        Self {
            store: ModelStore::new(),
        }
    }

    /// Shorthand for a pair with both sides set
    pub fn pair(key: &str, value: &str) -> Result<Self, SerializationError> {
        let mut pair = Self::new();
        pair.set_key(Some(key.to_string()))?;
        pair.set_value(Some(value.to_string()))?;
        Ok(pair)
    }

    store_accessors! {
        key / set_key: String = "key";
        value / set_value: String = "value";
    }

    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        writer.write_string_value("key", self.key()?.as_deref())?;
        writer.write_string_value(ODATA_TYPE_WIRE_KEY, self.odata_type()?.as_deref())?;
        writer.write_string_value("value", self.value()?.as_deref())?;
        Ok(())
    }
}

impl FieldDeserializable for KeyValue {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = FieldDeserializers::new();
        fields.insert(
            "key",
            field(|m: &mut Self, n| Ok(m.set_key(n.get_string_value()?)?)),
        );
        fields.insert(ODATA_TYPE_WIRE_KEY, odata_type_field());
        fields.insert(
            "value",
            field(|m: &mut Self, n| Ok(m.set_value(n.get_string_value()?)?)),
        );
        fields
    }
}

impl_parsable!(KeyValue { store: store });

/// Content options customized throughout the authentication flow.
///
/// Only honored by external tenants.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentCustomization {
    store: ModelStore,
}

impl ContentCustomization {
    pub fn new() -> Self {
        Self {
            store: ModelStore::new(),
        }
    }

    store_accessors! {
        /// Overrides for the attribute collection page
        attribute_collection / set_attribute_collection: Vec<Option<KeyValue>> = "attributeCollection";
        attribute_collection_relative_url / set_attribute_collection_relative_url: String = "attributeCollectionRelativeUrl";
        /// Overrides for the registration campaign page
        registration_campaign / set_registration_campaign: Vec<Option<KeyValue>> = "registrationCampaign";
        registration_campaign_relative_url / set_registration_campaign_relative_url: String = "registrationCampaignRelativeUrl";
    }

    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        let attribute_collection = self.attribute_collection()?;
        writer.write_collection_of_object_values(
            "attributeCollection",
            attribute_collection.as_deref().map(as_parsables).as_deref(),
        )?;
        writer.write_string_value(
            "attributeCollectionRelativeUrl",
            self.attribute_collection_relative_url()?.as_deref(),
        )?;
        writer.write_string_value(ODATA_TYPE_WIRE_KEY, self.odata_type()?.as_deref())?;
        let registration_campaign = self.registration_campaign()?;
        writer.write_collection_of_object_values(
            "registrationCampaign",
            registration_campaign.as_deref().map(as_parsables).as_deref(),
        )?;
        writer.write_string_value(
            "registrationCampaignRelativeUrl",
            self.registration_campaign_relative_url()?.as_deref(),
        )?;
        Ok(())
    }
}

impl FieldDeserializable for ContentCustomization {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = FieldDeserializers::new();
        fields.insert(
            "attributeCollection",
            field(|m: &mut Self, n| {
                Ok(m.set_attribute_collection(n.get_collection_of_object_values::<KeyValue>()?)?)
            }),
        );
        fields.insert(
            "attributeCollectionRelativeUrl",
            field(|m: &mut Self, n| {
                Ok(m.set_attribute_collection_relative_url(n.get_string_value()?)?)
            }),
        );
        fields.insert(ODATA_TYPE_WIRE_KEY, odata_type_field());
        fields.insert(
            "registrationCampaign",
            field(|m: &mut Self, n| {
                Ok(m.set_registration_campaign(n.get_collection_of_object_values::<KeyValue>()?)?)
            }),
        );
        fields.insert(
            "registrationCampaignRelativeUrl",
            field(|m: &mut Self, n| {
                Ok(m.set_registration_campaign_relative_url(n.get_string_value()?)?)
            }),
        );
        fields
    }
}

impl_parsable!(ContentCustomization { store: store });
