//! Model types addressable from the command line

use crate::models::callrecords::{DirectRoutingLogRow, MediaStream, PstnCallLogRow};
use crate::models::{
    AggregationOption, BucketAggregationDefinition, BucketAggregationRange,
    CalendarSharingMessageAction, CollapseProperty, ContentCustomization, Entity, EntityKind,
    ExternalLink, KeyValue, LoginPageLayoutConfiguration, LoginPageTextVisibilitySettings,
    OnenoteEntityBaseModel, OnenoteEntityBaseModelKind, OnenoteEntitySchemaObjectModel,
    OnenoteEntitySchemaObjectModelKind, OnenotePage, OrganizationalBranding,
    OrganizationalBrandingLocalization, OrganizationalBrandingProperties,
    OrganizationalBrandingPropertiesKind, PageLinks, ResultTemplateOption, SearchAlterationOptions,
    SearchQuery, SearchRequest, SharePointOneDriveOptions, SortProperty,
};
use crate::serialization::json::from_json_value;
use crate::serialization::{FieldDeserializable, Parsable, SerializationError};
use serde_json::Value;

const GRAPH_NAMESPACE: &str = "#microsoft.graph.";

/// A decoded model with the concrete type it resolved to
#[derive(Debug)]
pub struct Decoded {
    pub type_name: &'static str,
    pub model: Box<dyn Parsable>,
}

/// One entry of the type catalog
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// Name accepted by `--type`
    pub name: &'static str,
    /// True when decoding dispatches on `@odata.type`
    pub polymorphic: bool,
    decode: fn(&Value) -> Result<Decoded, SerializationError>,
    field_names: fn() -> Vec<&'static str>,
}

impl CatalogEntry {
    pub fn decode(&self, value: &Value) -> Result<Decoded, SerializationError> {
        (self.decode)(value)
    }

    /// Composed wire keys of the type's field-deserializer table
    pub fn field_names(&self) -> Vec<&'static str> {
        (self.field_names)()
    }
}

macro_rules! concrete {
    ($name:literal => $ty:ty) => {
        CatalogEntry {
            name: $name,
            polymorphic: false,
            decode: |value| {
                let model: $ty = from_json_value(value)?;
                Ok(Decoded {
                    type_name: stringify!($ty),
                    model: Box::new(model),
                })
            },
            field_names: || <$ty as FieldDeserializable>::field_deserializers().into_keys().collect(),
        }
    };
}

macro_rules! family {
    ($name:literal => $kind:ty, base $base:ty) => {
        CatalogEntry {
            name: $name,
            polymorphic: true,
            decode: |value| {
                let model: $kind = from_json_value(value)?;
                Ok(Decoded {
                    type_name: model.type_name(),
                    model: Box::new(model),
                })
            },
            field_names: || <$base as FieldDeserializable>::field_deserializers().into_keys().collect(),
        }
    };
}

static CATALOG: &[CatalogEntry] = &[
    family!("entity" => EntityKind, base Entity),
    family!("onenoteEntityBaseModel" => OnenoteEntityBaseModelKind, base OnenoteEntityBaseModel),
    family!("onenoteEntitySchemaObjectModel" => OnenoteEntitySchemaObjectModelKind, base OnenoteEntitySchemaObjectModel),
    concrete!("onenotePage" => OnenotePage),
    concrete!("pageLinks" => PageLinks),
    concrete!("externalLink" => ExternalLink),
    family!("organizationalBrandingProperties" => OrganizationalBrandingPropertiesKind, base OrganizationalBrandingProperties),
    concrete!("organizationalBranding" => OrganizationalBranding),
    concrete!("organizationalBrandingLocalization" => OrganizationalBrandingLocalization),
    concrete!("loginPageLayoutConfiguration" => LoginPageLayoutConfiguration),
    concrete!("loginPageTextVisibilitySettings" => LoginPageTextVisibilitySettings),
    concrete!("contentCustomization" => ContentCustomization),
    concrete!("keyValue" => KeyValue),
    concrete!("searchRequest" => SearchRequest),
    concrete!("searchQuery" => SearchQuery),
    concrete!("searchAlterationOptions" => SearchAlterationOptions),
    concrete!("aggregationOption" => AggregationOption),
    concrete!("bucketAggregationDefinition" => BucketAggregationDefinition),
    concrete!("bucketAggregationRange" => BucketAggregationRange),
    concrete!("collapseProperty" => CollapseProperty),
    concrete!("resultTemplateOption" => ResultTemplateOption),
    concrete!("sharePointOneDriveOptions" => SharePointOneDriveOptions),
    concrete!("sortProperty" => SortProperty),
    concrete!("calendarSharingMessageAction" => CalendarSharingMessageAction),
    concrete!("callRecords.mediaStream" => MediaStream),
    concrete!("callRecords.pstnCallLogRow" => PstnCallLogRow),
    concrete!("callRecords.directRoutingLogRow" => DirectRoutingLogRow),
];

/// Every supported type, in catalog order
pub fn entries() -> &'static [CatalogEntry] {
    CATALOG
}

/// Look up a type by name, with or without the `#microsoft.graph.` prefix
pub fn lookup(name: &str) -> Option<&'static CatalogEntry> {
    let name = name.trim();
    let name = name.strip_prefix(GRAPH_NAMESPACE).unwrap_or(name);
    CATALOG.iter().find(|entry| entry.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_accepts_discriminator_form() {
        assert_eq!(lookup("#microsoft.graph.onenotePage").unwrap().name, "onenotePage");
        assert_eq!(lookup("SearchRequest").unwrap().name, "searchRequest");
        assert!(lookup("driveItem").is_none());
    }

    #[test]
    fn test_family_decode_reports_concrete_type() {
        let entry = lookup("entity").unwrap();
        let decoded = entry
            .decode(&json!({"@odata.type": "#microsoft.graph.onenotePage", "title": "x"}))
            .unwrap();
        assert_eq!(decoded.type_name, "OnenotePage");

        let decoded = entry.decode(&json!({"id": "1"})).unwrap();
        assert_eq!(decoded.type_name, "Entity");
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = entries().iter().map(|e| e.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), entries().len());
    }
}
