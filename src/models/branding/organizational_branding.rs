//! Default tenant branding and its per-locale variants

use super::OrganizationalBrandingProperties;
use crate::models::preset_odata_type;
use crate::serialization::{
    FieldDeserializable, FieldDeserializers, ParseNodeExt, SerializationError,
    SerializationWriter, as_parsables, field, inherit_field_deserializers,
};

pub(crate) const ORGANIZATIONAL_BRANDING_TYPE: &str = "#microsoft.graph.organizationalBranding";
pub(crate) const ORGANIZATIONAL_BRANDING_LOCALIZATION_TYPE: &str =
    "#microsoft.graph.organizationalBrandingLocalization";

/// Default branding of a tenant
#[derive(Debug, Clone, PartialEq)]
pub struct OrganizationalBranding {
    base: OrganizationalBrandingProperties,
}

impl OrganizationalBranding {
    pub fn new() -> Self {
        let mut branding = Self {
            base: OrganizationalBrandingProperties::new(),
        };
        preset_odata_type(&mut branding, ORGANIZATIONAL_BRANDING_TYPE);
        branding
    }

    store_accessors! {
        /// Locale-specific branding overrides
        localizations / set_localizations: Vec<Option<OrganizationalBrandingLocalization>> = "localizations";
    }

    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        self.base.write_fields(writer)?;
        let localizations = self.localizations()?;
        writer.write_collection_of_object_values(
            "localizations",
            localizations.as_deref().map(as_parsables).as_deref(),
        )?;
        Ok(())
    }
}

impl FieldDeserializable for OrganizationalBranding {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = inherit_field_deserializers(
            OrganizationalBrandingProperties::field_deserializers(),
            |m: &mut Self| &mut m.base,
        );
        fields.insert(
            "localizations",
            field(|m: &mut Self, n| {
                Ok(m.set_localizations(
                    n.get_collection_of_object_values::<OrganizationalBrandingLocalization>()?,
                )?)
            }),
        );
        fields
    }
}

impl_parsable!(OrganizationalBranding { base: base });
derive_base!(OrganizationalBranding => OrganizationalBrandingProperties);

/// Branding for one locale; declares no fields of its own
#[derive(Debug, Clone, PartialEq)]
pub struct OrganizationalBrandingLocalization {
    base: OrganizationalBrandingProperties,
}

impl OrganizationalBrandingLocalization {
    pub fn new() -> Self {
        let mut localization = Self {
            base: OrganizationalBrandingProperties::new(),
        };
        preset_odata_type(&mut localization, ORGANIZATIONAL_BRANDING_LOCALIZATION_TYPE);
        localization
    }

    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        self.base.write_fields(writer)
    }
}

impl FieldDeserializable for OrganizationalBrandingLocalization {
    fn field_deserializers() -> FieldDeserializers<Self> {
        inherit_field_deserializers(
            OrganizationalBrandingProperties::field_deserializers(),
            |m: &mut Self| &mut m.base,
        )
    }
}

impl_parsable!(OrganizationalBrandingLocalization { base: base });
derive_base!(OrganizationalBrandingLocalization => OrganizationalBrandingProperties);
