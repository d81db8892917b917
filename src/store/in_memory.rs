//! In-memory backing store
//!
//! Keeps values in a map and tracks, per key, whether the value changed
//! after initialization completed. Serializers combine this with
//! `return_only_changed_values` to emit only dirty properties.

use super::{
    BackingStore, BackingStoreFactory, StoreError, StoreSubscriber, StoredValue,
};
use crate::config::GraphModelConfig;
use std::collections::HashMap;
use std::fmt;

#[derive(Clone)]
struct Entry {
    value: Option<Box<dyn StoredValue>>,
    changed: bool,
}

/// Map-backed [`BackingStore`] with change tracking
///
/// Insertion order of keys is kept so that enumeration is deterministic.
#[derive(Clone)]
pub struct InMemoryBackingStore {
    keys: Vec<String>,
    entries: HashMap<String, Entry>,
    initialization_completed: bool,
    return_only_changed_values: bool,
    subscribers: Vec<(String, StoreSubscriber)>,
}

impl InMemoryBackingStore {
    /// Create an empty store with initialization already completed
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            entries: HashMap::new(),
            initialization_completed: true,
            return_only_changed_values: false,
            subscribers: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn normalize_key(key: &str) -> Result<&str, StoreError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        Ok(key)
    }

    fn visible(&self, entry: &Entry) -> bool {
        !self.return_only_changed_values || entry.changed
    }
}

impl Default for InMemoryBackingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InMemoryBackingStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for key in &self.keys {
            if let Some(entry) = self.entries.get(key) {
                map.entry(key, &entry.value);
            }
        }
        map.finish()
    }
}

impl BackingStore for InMemoryBackingStore {
    fn get(&self, key: &str) -> Result<Option<&dyn StoredValue>, StoreError> {
        let key = Self::normalize_key(key)?;
        Ok(self
            .entries
            .get(key)
            .filter(|entry| self.visible(entry))
            .and_then(|entry| entry.value.as_deref()))
    }

    fn set(&mut self, key: &str, value: Option<Box<dyn StoredValue>>) -> Result<(), StoreError> {
        let key = Self::normalize_key(key)?.to_string();
        let changed_flag = self.initialization_completed;

        let unchanged = match (self.entries.get(&key), value.as_deref()) {
            (Some(existing), Some(new)) => existing
                .value
                .as_deref()
                .is_some_and(|current| current.eq_dyn(new)),
            (Some(existing), None) => existing.value.is_none(),
            (None, _) => false,
        };
        if unchanged {
            return Ok(());
        }

        let previous = match self.entries.remove(&key) {
            Some(entry) => entry.value,
            None => {
                self.keys.push(key.clone());
                None
            }
        };

        for (_, subscriber) in &self.subscribers {
            subscriber(&key, previous.as_deref(), value.as_deref());
        }

        self.entries.insert(
            key,
            Entry {
                value,
                changed: changed_flag,
            },
        );
        Ok(())
    }

    fn enumerate(&self) -> Vec<(&str, Option<&dyn StoredValue>)> {
        self.keys
            .iter()
            .filter_map(|key| self.entries.get(key).map(|entry| (key, entry)))
            .filter(|(_, entry)| self.visible(entry))
            .map(|(key, entry)| (key.as_str(), entry.value.as_deref()))
            .collect()
    }

    fn entries(&self) -> Vec<(&str, Option<&dyn StoredValue>)> {
        self.keys
            .iter()
            .filter_map(|key| {
                self.entries
                    .get(key)
                    .map(|entry| (key.as_str(), entry.value.as_deref()))
            })
            .collect()
    }

    fn enumerate_keys_for_values_changed_to_nil(&self) -> Vec<String> {
        self.keys
            .iter()
            .filter(|key| {
                self.entries
                    .get(*key)
                    .is_some_and(|entry| entry.changed && entry.value.is_none())
            })
            .cloned()
            .collect()
    }

    fn clear(&mut self) {
        self.keys.clear();
        self.entries.clear();
    }

    fn initialization_completed(&self) -> bool {
        self.initialization_completed
    }

    fn set_initialization_completed(&mut self, completed: bool) {
        self.initialization_completed = completed;
        for entry in self.entries.values_mut() {
            entry.changed = !completed;
        }
    }

    fn return_only_changed_values(&self) -> bool {
        self.return_only_changed_values
    }

    fn set_return_only_changed_values(&mut self, only_changed: bool) {
        self.return_only_changed_values = only_changed;
    }

    fn subscribe(&mut self, id: &str, subscriber: StoreSubscriber) -> Result<(), StoreError> {
        let id = Self::normalize_key(id)?;
        self.subscribers.retain(|(existing, _)| existing != id);
        self.subscribers.push((id.to_string(), subscriber));
        Ok(())
    }

    fn unsubscribe(&mut self, id: &str) -> Result<(), StoreError> {
        let id = Self::normalize_key(id)?;
        self.subscribers.retain(|(existing, _)| existing != id);
        Ok(())
    }

    fn clone_store(&self) -> Box<dyn BackingStore> {
        Box::new(self.clone())
    }
}

/// Factory producing [`InMemoryBackingStore`] instances
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackingStoreFactory {
    return_only_changed_values: bool,
}

impl InMemoryBackingStoreFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory whose stores start with the configured change-tracking view
    pub fn from_config(config: &GraphModelConfig) -> Self {
        Self {
            return_only_changed_values: config.return_only_changed_values,
        }
    }
}

impl BackingStoreFactory for InMemoryBackingStoreFactory {
    fn create_backing_store(&self) -> Box<dyn BackingStore> {
        let mut store = InMemoryBackingStore::new();
        store.set_return_only_changed_values(self.return_only_changed_values);
        Box::new(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::BackingStoreExt;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_get_missing_key_returns_none() {
        let store = InMemoryBackingStore::new();
        assert_eq!(store.get_value::<String>("name").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let mut store = InMemoryBackingStore::new();
        store.set_value("name", Some("Contoso".to_string())).unwrap();
        assert_eq!(
            store.get_value::<String>("name").unwrap(),
            Some("Contoso".to_string())
        );
    }

    #[test]
    fn test_empty_key_rejected() {
        let mut store = InMemoryBackingStore::new();
        assert_eq!(
            store.set_value("  ", Some(1_i32)),
            Err(StoreError::EmptyKey)
        );
        assert!(matches!(store.get(""), Err(StoreError::EmptyKey)));
    }

    #[test]
    fn test_type_mismatch_is_an_error() {
        let mut store = InMemoryBackingStore::new();
        store.set_value("size", Some(25_i32)).unwrap();
        let err = store.get_value::<String>("size").unwrap_err();
        assert!(matches!(err, StoreError::TypeMismatch { ref key, .. } if key == "size"));
    }

    #[test]
    fn test_explicit_null_reads_as_none() {
        let mut store = InMemoryBackingStore::new();
        store.set_value("size", Some(25_i32)).unwrap();
        store.set_value::<i32>("size", None).unwrap();
        assert_eq!(store.get_value::<i32>("size").unwrap(), None);
        assert_eq!(store.enumerate_keys_for_values_changed_to_nil(), vec!["size"]);
    }

    #[test]
    fn test_change_tracking() {
        let mut store = InMemoryBackingStore::new();
        store.set_initialization_completed(false);
        store.set_value("from", Some(0_i32)).unwrap();
        store.set_value("size", Some(10_i32)).unwrap();
        store.set_initialization_completed(true);

        store.set_value("size", Some(25_i32)).unwrap();
        store.set_return_only_changed_values(true);

        assert_eq!(store.get_value::<i32>("from").unwrap(), None);
        assert_eq!(store.get_value::<i32>("size").unwrap(), Some(25));
        let keys: Vec<&str> = store.enumerate().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["size"]);
        assert_eq!(store.entries().len(), 2);
    }

    #[test]
    fn test_setting_equal_value_is_not_a_change() {
        let mut store = InMemoryBackingStore::new();
        store.set_initialization_completed(false);
        store.set_value("size", Some(10_i32)).unwrap();
        store.set_initialization_completed(true);
        store.set_value("size", Some(10_i32)).unwrap();
        store.set_return_only_changed_values(true);
        assert!(store.enumerate().is_empty());
    }

    #[test]
    fn test_enumerate_keeps_insertion_order() {
        let mut store = InMemoryBackingStore::new();
        store.set_value("b", Some(true)).unwrap();
        store.set_value("a", Some(false)).unwrap();
        store.set_value("b", Some(false)).unwrap();
        let keys: Vec<&str> = store.enumerate().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_subscribers_see_effective_sets() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut store = InMemoryBackingStore::new();
        store
            .subscribe(
                "audit",
                Arc::new(
                    move |key: &str,
                          previous: Option<&dyn StoredValue>,
                          _current: Option<&dyn StoredValue>| {
                        sink.lock()
                            .unwrap()
                            .push((key.to_string(), previous.is_some()));
                    },
                ),
            )
            .unwrap();

        store.set_value("title", Some("a".to_string())).unwrap();
        store.set_value("title", Some("a".to_string())).unwrap();
        store.set_value("title", Some("b".to_string())).unwrap();
        store.unsubscribe("audit").unwrap();
        store.set_value("title", Some("c".to_string())).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![("title".to_string(), false), ("title".to_string(), true)]
        );
    }

    #[test]
    fn test_clear() {
        let mut store = InMemoryBackingStore::new();
        store.set_value("id", Some("1".to_string())).unwrap();
        store.clear();
        assert!(store.is_empty());
        assert!(store.enumerate().is_empty());
    }

    #[test]
    fn test_factory_from_config() {
        let config = GraphModelConfig::builder()
            .return_only_changed_values(true)
            .build();
        let store = InMemoryBackingStoreFactory::from_config(&config).create_backing_store();
        assert!(store.return_only_changed_values());
        assert!(store.initialization_completed());
    }
}
