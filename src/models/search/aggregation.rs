//! Refiners (aggregations) over search results

use super::BucketAggregationSortProperty;
use crate::models::odata_type_field;
use crate::serialization::{
    FieldDeserializable, FieldDeserializers, ODATA_TYPE_WIRE_KEY, Parsable, ParseNodeExt,
    SerializationError, SerializationWriter, as_parsable, as_parsables, field,
};
use crate::store::ModelStore;

/// An aggregation to compute over a field
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationOption {
    store: ModelStore,
}

impl AggregationOption {
    pub fn new() -> Self {
        Self {
            store: ModelStore::new(),
        }
    }

    store_accessors! {
        bucket_definition / set_bucket_definition: BucketAggregationDefinition = "bucketDefinition";
        /// The field on which to compute the aggregation
        field / set_field: String = "field";
        /// Number of buckets to return; defaults to 10 server-side
        size / set_size: i32 = "size";
    }

    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        writer.write_object_value("bucketDefinition", as_parsable(&self.bucket_definition()?))?;
        writer.write_string_value("field", self.field()?.as_deref())?;
        writer.write_string_value(ODATA_TYPE_WIRE_KEY, self.odata_type()?.as_deref())?;
        writer.write_int32_value("size", self.size()?)?;
        Ok(())
    }
}

impl FieldDeserializable for AggregationOption {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = FieldDeserializers::new();
        fields.insert(
            "bucketDefinition",
            field(|m: &mut Self, n| {
                Ok(m.set_bucket_definition(n.get_object_value::<BucketAggregationDefinition>()?)?)
            }),
        );
        fields.insert(
            "field",
            field(|m: &mut Self, n| Ok(m.set_field(n.get_string_value()?)?)),
        );
        fields.insert(ODATA_TYPE_WIRE_KEY, odata_type_field());
        fields.insert(
            "size",
            field(|m: &mut Self, n| Ok(m.set_size(n.get_int32_value()?)?)),
        );
        fields
    }
}

impl_parsable!(AggregationOption { store: store });

/// How buckets of an aggregation are formed and ordered
#[derive(Debug, Clone, PartialEq)]
pub struct BucketAggregationDefinition {
    store: ModelStore,
}

impl BucketAggregationDefinition {
    pub fn new() -> Self {
        Self {
            store: ModelStore::new(),
        }
    }

    store_accessors! {
        is_descending / set_is_descending: bool = "isDescending";
        /// Minimum number of items a bucket must hold to be returned
        minimum_count / set_minimum_count: i32 = "minimumCount";
        /// Only aggregate values starting with this prefix
        prefix_filter / set_prefix_filter: String = "prefixFilter";
        /// Explicit numeric or date ranges; replaces value bucketing
        ranges / set_ranges: Vec<Option<BucketAggregationRange>> = "ranges";
        sort_by / set_sort_by: BucketAggregationSortProperty = "sortBy";
    }

    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        writer.write_bool_value("isDescending", self.is_descending()?)?;
        writer.write_int32_value("minimumCount", self.minimum_count()?)?;
        writer.write_string_value(ODATA_TYPE_WIRE_KEY, self.odata_type()?.as_deref())?;
        writer.write_string_value("prefixFilter", self.prefix_filter()?.as_deref())?;
        let ranges = self.ranges()?;
        writer.write_collection_of_object_values(
            "ranges",
            ranges.as_deref().map(as_parsables).as_deref(),
        )?;
        writer.write_enum_value(
            "sortBy",
            self.sort_by()?.map(|v| v.to_string()).as_deref(),
        )?;
        Ok(())
    }
}

impl FieldDeserializable for BucketAggregationDefinition {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = FieldDeserializers::new();
        fields.insert(
            "isDescending",
            field(|m: &mut Self, n| Ok(m.set_is_descending(n.get_bool_value()?)?)),
        );
        fields.insert(
            "minimumCount",
            field(|m: &mut Self, n| Ok(m.set_minimum_count(n.get_int32_value()?)?)),
        );
        fields.insert(ODATA_TYPE_WIRE_KEY, odata_type_field());
        fields.insert(
            "prefixFilter",
            field(|m: &mut Self, n| Ok(m.set_prefix_filter(n.get_string_value()?)?)),
        );
        fields.insert(
            "ranges",
            field(|m: &mut Self, n| {
                Ok(m.set_ranges(n.get_collection_of_object_values::<BucketAggregationRange>()?)?)
            }),
        );
        fields.insert(
            "sortBy",
            field(|m: &mut Self, n| {
                if let Some(value) = n.get_enum::<BucketAggregationSortProperty>()? {
                    m.set_sort_by(Some(value))?;
                }
                Ok(())
            }),
        );
        fields
    }
}

impl_parsable!(BucketAggregationDefinition { store: store });

/// A half-open `[from, to)` bucket range
#[derive(Debug, Clone, PartialEq)]
pub struct BucketAggregationRange {
    store: ModelStore,
}

impl BucketAggregationRange {
    pub fn new() -> Self {
        Self {
            store: ModelStore::new(),
        }
    }

    store_accessors! {
        /// Inclusive lower bound
        from / set_from: String = "from";
        /// Exclusive upper bound
        to / set_to: String = "to";
    }

    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        writer.write_string_value("from", self.from()?.as_deref())?;
        writer.write_string_value(ODATA_TYPE_WIRE_KEY, self.odata_type()?.as_deref())?;
        writer.write_string_value("to", self.to()?.as_deref())?;
        Ok(())
    }
}

impl FieldDeserializable for BucketAggregationRange {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = FieldDeserializers::new();
        fields.insert(
            "from",
            field(|m: &mut Self, n| Ok(m.set_from(n.get_string_value()?)?)),
        );
        fields.insert(ODATA_TYPE_WIRE_KEY, odata_type_field());
        fields.insert(
            "to",
            field(|m: &mut Self, n| Ok(m.set_to(n.get_string_value()?)?)),
        );
        fields
    }
}

impl_parsable!(BucketAggregationRange { store: store });
