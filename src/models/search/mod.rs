//! Microsoft Search request models

pub mod aggregation;
pub mod enums;
pub mod options;
pub mod query;
pub mod request;

pub use aggregation::{AggregationOption, BucketAggregationDefinition, BucketAggregationRange};
pub use enums::{BucketAggregationSortProperty, EntityType, SearchContent};
pub use options::{
    CollapseProperty, ResultTemplateOption, SharePointOneDriveOptions, SortProperty,
};
pub use query::{SearchAlterationOptions, SearchQuery};
pub use request::SearchRequest;
