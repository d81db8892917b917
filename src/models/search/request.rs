//! The body of a `/search/query` call

use super::{
    AggregationOption, CollapseProperty, EntityType, ResultTemplateOption, SearchAlterationOptions,
    SearchQuery, SharePointOneDriveOptions, SortProperty,
};
use crate::models::odata_type_field;
use crate::serialization::writer::enum_names;
use crate::serialization::{
    FieldDeserializable, FieldDeserializers, ODATA_TYPE_WIRE_KEY, Parsable, ParseNodeExt,
    SerializationError, SerializationWriter, as_parsable, as_parsables, field,
};
use crate::store::ModelStore;

/// One search request of a query batch
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    store: ModelStore,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self {
            store: ModelStore::new(),
        }
    }

    store_accessors! {
        /// Refiner filters, in KQL, applied to narrow the results
        aggregation_filters / set_aggregation_filters: Vec<String> = "aggregationFilters";
        aggregations / set_aggregations: Vec<Option<AggregationOption>> = "aggregations";
        collapse_properties / set_collapse_properties: Vec<Option<CollapseProperty>> = "collapseProperties";
        /// Connection ids of external content sources, for `externalItem` searches
        content_sources / set_content_sources: Vec<String> = "contentSources";
        /// Promote the most relevant messages to the top of the results
        enable_top_results / set_enable_top_results: bool = "enableTopResults";
        entity_types / set_entity_types: Vec<EntityType> = "entityTypes";
        /// Properties to return for each hit
        fields / set_fields: Vec<String> = "fields";
        /// Zero-based offset of the first result
        from / set_from: i32 = "from";
        query / set_query: SearchQuery = "query";
        query_alteration_options / set_query_alteration_options: SearchAlterationOptions = "queryAlterationOptions";
        /// Geographic region for application-permission searches
        region / set_region: String = "region";
        result_template_options / set_result_template_options: ResultTemplateOption = "resultTemplateOptions";
        share_point_one_drive_options / set_share_point_one_drive_options: SharePointOneDriveOptions = "sharePointOneDriveOptions";
        /// Page size
        size / set_size: i32 = "size";
        sort_properties / set_sort_properties: Vec<Option<SortProperty>> = "sortProperties";
    }

    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        writer.write_collection_of_string_values(
            "aggregationFilters",
            self.aggregation_filters()?.as_deref(),
        )?;
        let aggregations = self.aggregations()?;
        writer.write_collection_of_object_values(
            "aggregations",
            aggregations.as_deref().map(as_parsables).as_deref(),
        )?;
        let collapse_properties = self.collapse_properties()?;
        writer.write_collection_of_object_values(
            "collapseProperties",
            collapse_properties.as_deref().map(as_parsables).as_deref(),
        )?;
        writer.write_collection_of_string_values(
            "contentSources",
            self.content_sources()?.as_deref(),
        )?;
        writer.write_bool_value("enableTopResults", self.enable_top_results()?)?;
        writer.write_collection_of_string_values(
            "entityTypes",
            self.entity_types()?.map(|v| enum_names(&v)).as_deref(),
        )?;
        writer.write_collection_of_string_values("fields", self.fields()?.as_deref())?;
        writer.write_int32_value("from", self.from()?)?;
        writer.write_string_value(ODATA_TYPE_WIRE_KEY, self.odata_type()?.as_deref())?;
        writer.write_object_value("query", as_parsable(&self.query()?))?;
        writer.write_object_value(
            "queryAlterationOptions",
            as_parsable(&self.query_alteration_options()?),
        )?;
        writer.write_string_value("region", self.region()?.as_deref())?;
        writer.write_object_value(
            "resultTemplateOptions",
            as_parsable(&self.result_template_options()?),
        )?;
        writer.write_object_value(
            "sharePointOneDriveOptions",
            as_parsable(&self.share_point_one_drive_options()?),
        )?;
        writer.write_int32_value("size", self.size()?)?;
        let sort_properties = self.sort_properties()?;
        writer.write_collection_of_object_values(
            "sortProperties",
            sort_properties.as_deref().map(as_parsables).as_deref(),
        )?;
        Ok(())
    }
}

impl FieldDeserializable for SearchRequest {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = FieldDeserializers::new();
        fields.insert(
            "aggregationFilters",
            field(|m: &mut Self, n| {
                Ok(m.set_aggregation_filters(n.get_collection_of_primitive_values::<String>()?)?)
            }),
        );
        fields.insert(
            "aggregations",
            field(|m: &mut Self, n| {
                Ok(m.set_aggregations(n.get_collection_of_object_values::<AggregationOption>()?)?)
            }),
        );
        fields.insert(
            "collapseProperties",
            field(|m: &mut Self, n| {
                Ok(m.set_collapse_properties(
                    n.get_collection_of_object_values::<CollapseProperty>()?,
                )?)
            }),
        );
        fields.insert(
            "contentSources",
            field(|m: &mut Self, n| {
                Ok(m.set_content_sources(n.get_collection_of_primitive_values::<String>()?)?)
            }),
        );
        fields.insert(
            "enableTopResults",
            field(|m: &mut Self, n| Ok(m.set_enable_top_results(n.get_bool_value()?)?)),
        );
        fields.insert(
            "entityTypes",
            field(|m: &mut Self, n| {
                Ok(m.set_entity_types(n.get_collection_of_enum_values::<EntityType>()?)?)
            }),
        );
        fields.insert(
            "fields",
            field(|m: &mut Self, n| {
                Ok(m.set_fields(n.get_collection_of_primitive_values::<String>()?)?)
            }),
        );
        fields.insert(
            "from",
            field(|m: &mut Self, n| Ok(m.set_from(n.get_int32_value()?)?)),
        );
        fields.insert(ODATA_TYPE_WIRE_KEY, odata_type_field());
        fields.insert(
            "query",
            field(|m: &mut Self, n| Ok(m.set_query(n.get_object_value::<SearchQuery>()?)?)),
        );
        fields.insert(
            "queryAlterationOptions",
            field(|m: &mut Self, n| {
                Ok(m.set_query_alteration_options(
                    n.get_object_value::<SearchAlterationOptions>()?,
                )?)
            }),
        );
        fields.insert(
            "region",
            field(|m: &mut Self, n| Ok(m.set_region(n.get_string_value()?)?)),
        );
        fields.insert(
            "resultTemplateOptions",
            field(|m: &mut Self, n| {
                Ok(m.set_result_template_options(n.get_object_value::<ResultTemplateOption>()?)?)
            }),
        );
        fields.insert(
            "sharePointOneDriveOptions",
            field(|m: &mut Self, n| {
                Ok(m.set_share_point_one_drive_options(
                    n.get_object_value::<SharePointOneDriveOptions>()?,
                )?)
            }),
        );
        fields.insert(
            "size",
            field(|m: &mut Self, n| Ok(m.set_size(n.get_int32_value()?)?)),
        );
        fields.insert(
            "sortProperties",
            field(|m: &mut Self, n| {
                Ok(m.set_sort_properties(n.get_collection_of_object_values::<SortProperty>()?)?)
            }),
        );
        fields
    }
}

impl_parsable!(SearchRequest { store: store });
