//! Tests for backing stores as seen through models

use graph_model_sdk::models::{SearchRequest, SortProperty};
use graph_model_sdk::store::{
    BackingStore, BackingStoreExt, InMemoryBackingStore, ModelStore, StoreError, StoredValue,
};
use graph_model_sdk::{Parsable, from_json_str, to_json_value};
use serde_json::json;
use std::sync::{Arc, Mutex};

mod model_store_tests {
    use super::*;

    #[test]
    fn test_clone_is_deep() {
        let mut original = SortProperty::new();
        original.set_name(Some("title".to_string())).unwrap();

        let mut copy = original.clone();
        copy.set_name(Some("size".to_string())).unwrap();

        assert_eq!(original.name().unwrap().as_deref(), Some("title"));
        assert_eq!(copy.name().unwrap().as_deref(), Some("size"));
        assert_ne!(original, copy);
    }

    #[test]
    fn test_equality_ignores_explicit_nulls() {
        let mut a = SortProperty::new();
        a.set_name(Some("title".to_string())).unwrap();
        let mut b = a.clone();
        b.set_is_descending(None).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_additional_data_equals_unset() {
        let mut a = SortProperty::new();
        a.set_name(Some("title".to_string())).unwrap();
        let mut b = a.clone();
        b.set_additional_data(Some(serde_json::Map::new())).unwrap();
        assert_eq!(a, b);

        let mut extra = serde_json::Map::new();
        extra.insert("boost".to_string(), json!(2));
        b.set_additional_data(Some(extra)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_wrapping_a_custom_store() {
        let mut inner = InMemoryBackingStore::new();
        inner.set_value("name", Some("rank".to_string())).unwrap();
        let store = ModelStore::from_store(Box::new(inner));
        assert_eq!(
            store.get_value::<String>("name").unwrap().as_deref(),
            Some("rank")
        );
        assert_eq!(
            store.get_value::<i32>("name"),
            Err(StoreError::TypeMismatch {
                key: "name".to_string(),
                expected: "i32"
            })
        );
    }
}

mod change_tracking_tests {
    use super::*;

    #[test]
    fn test_decoded_model_starts_clean() {
        let request: SearchRequest = from_json_str(r#"{"from":0,"size":10}"#).unwrap();
        let store = request.backing_store();
        assert!(store.initialization_completed());

        let mut request = request;
        request.backing_store_mut().set_return_only_changed_values(true);
        assert_eq!(request.size().unwrap(), None);
        assert!(request.backing_store().enumerate().is_empty());
    }

    #[test]
    fn test_only_changed_values_are_serialized() {
        let mut request: SearchRequest =
            from_json_str(r#"{"from":0,"size":10,"region":"EMEA"}"#).unwrap();
        request.set_size(Some(25)).unwrap();
        request.set_region(None).unwrap();
        request.backing_store_mut().set_return_only_changed_values(true);

        assert_eq!(to_json_value(&request).unwrap(), json!({"size": 25}));
        assert_eq!(
            request.backing_store().enumerate_keys_for_values_changed_to_nil(),
            vec!["region".to_string()]
        );

        request.backing_store_mut().set_return_only_changed_values(false);
        assert_eq!(to_json_value(&request).unwrap(), json!({"from": 0, "size": 25}));
    }

    #[test]
    fn test_subscriber_observes_effective_edits() {
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut request = SearchRequest::new();
        request
            .backing_store_mut()
            .subscribe(
                "audit",
                Arc::new(
                    move |key: &str,
                          _previous: Option<&dyn StoredValue>,
                          _current: Option<&dyn StoredValue>| {
                        sink.lock().unwrap().push(key.to_string());
                    },
                ),
            )
            .unwrap();

        request.set_from(Some(5)).unwrap();
        request.set_from(Some(5)).unwrap();
        request.set_size(Some(1)).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec!["from", "size"]);
    }
}
