//! Graph Model SDK - backed resource models for Microsoft Graph payloads
//!
//! Provides:
//! - Backing stores with change tracking (`store`)
//! - The parse-node / serialization-writer runtime and its JSON codec (`serialization`)
//! - Generated-style resource models and polymorphic families (`models`)
//! - Runtime configuration (`config`)

pub mod config;
pub mod models;
pub mod serialization;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types
pub use config::{ConfigError, GraphModelConfig, GraphModelConfigBuilder};
pub use serialization::json::{
    JsonParseNode, JsonSerializationWriter, from_json_slice, from_json_str, from_json_value,
    to_json_string, to_json_value,
};
pub use serialization::{
    AdditionalData, FieldDeserializable, IsoDuration, Parsable, ParsableFactory, ParseNode,
    ParseNodeExt, SerializationError, SerializationWriter,
};
pub use store::{
    BackingStore, BackingStoreExt, BackingStoreFactory, InMemoryBackingStore,
    InMemoryBackingStoreFactory, ModelStore, StoreError,
};
