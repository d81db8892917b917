//! Microsoft Graph resource models
//!
//! Each model keeps its state in a [`ModelStore`](crate::store::ModelStore) and exposes typed
//! accessors over it. Subtypes embed their base type as a `base` field and
//! deref to it, so base accessors are available on the subtype directly.
//! Polymorphic families are enums in the `*Kind` types.

#[macro_use]
mod macros;
#[macro_use]
mod family;

pub mod branding;
pub mod calendar;
pub mod callrecords;
pub mod entity;
pub mod onenote;
pub mod search;

pub use branding::{
    ContentCustomization, KeyValue, LayoutTemplateType, LoginPageLayoutConfiguration,
    LoginPageTextVisibilitySettings, OrganizationalBranding, OrganizationalBrandingLocalization, OrganizationalBrandingProperties,
    OrganizationalBrandingPropertiesKind,
};
pub use calendar::{
    CalendarSharingAction, CalendarSharingActionImportance, CalendarSharingActionType,
    CalendarSharingMessageAction,
};
pub use entity::{Entity, EntityKind};
pub use onenote::{
    ExternalLink, OnenoteEntityBaseModel, OnenoteEntityBaseModelKind,
    OnenoteEntitySchemaObjectModel, OnenoteEntitySchemaObjectModelKind, OnenotePage, PageLinks,
};
pub use search::{
    AggregationOption, BucketAggregationDefinition, BucketAggregationRange,
    BucketAggregationSortProperty, CollapseProperty, EntityType, ResultTemplateOption,
    SearchAlterationOptions, SearchContent, SearchQuery, SearchRequest, SharePointOneDriveOptions,
    SortProperty,
};

use crate::serialization::{FieldDeserializer, Parsable, ParseNode, field};

/// Deserializer for the `@odata.type` wire field
pub(crate) fn odata_type_field<T: Parsable + 'static>() -> FieldDeserializer<T> {
    field(|m: &mut T, n: &dyn ParseNode| {
        m.set_odata_type(n.get_string_value()?)?;
        Ok(())
    })
}

/// Seed a freshly constructed subtype with its discriminator
pub(crate) fn preset_odata_type(model: &mut dyn Parsable, odata_type: &str) {
    if let Err(e) = model.set_odata_type(Some(odata_type.to_string())) {
        tracing::warn!(odata_type, error = %e, "Backing store rejected discriminator");
    }
}
