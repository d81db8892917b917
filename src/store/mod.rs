//! Backing store abstraction
//!
//! Every model keeps its state in a backing store: a property bag keyed by
//! wire property name. Models never hold native fields; typed accessors read
//! and write through [`BackingStoreExt::get_value`] and
//! [`BackingStoreExt::set_value`].
//!
//! - [`InMemoryBackingStore`]: the default in-process implementation
//! - [`BackingStoreFactory`]: creates the store for each new model instance
//! - [`ModelStore`]: owning handle embedded in models

pub mod in_memory;

pub use in_memory::{InMemoryBackingStore, InMemoryBackingStoreFactory};

use once_cell::sync::OnceCell;
use std::any::{Any, type_name};
use std::fmt::Debug;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Store key holding the unknown wire fields of a model.
pub const ADDITIONAL_DATA_KEY: &str = "additionalData";

/// Store key holding the `@odata.type` discriminator of a model.
pub const ODATA_TYPE_KEY: &str = "odataType";

/// Error type for backing store operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("Backing store key cannot be empty")]
    EmptyKey,
    #[error("Value stored under '{key}' is not a {expected}")]
    TypeMismatch { key: String, expected: &'static str },
    #[error("Backing store factory is already configured")]
    FactoryAlreadySet,
    #[error("Backing store error: {0}")]
    BackendError(String),
}

/// A value that can live in a backing store.
///
/// Implemented for every `Clone + Debug + PartialEq` type that is
/// `Send + Sync + 'static`, which covers primitives, enums, collections and
/// the models themselves.
pub trait StoredValue: Any + Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    fn clone_boxed(&self) -> Box<dyn StoredValue>;

    /// Compare against another stored value of possibly different type.
    fn eq_dyn(&self, other: &dyn StoredValue) -> bool;
}

impl<T> StoredValue for T
where
    T: Any + Clone + Debug + PartialEq + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_boxed(&self) -> Box<dyn StoredValue> {
        Box::new(self.clone())
    }

    fn eq_dyn(&self, other: &dyn StoredValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

impl Clone for Box<dyn StoredValue> {
    fn clone(&self) -> Self {
        (**self).clone_boxed()
    }
}

/// Callback invoked with `(key, previous, current)` after an effective set.
pub type StoreSubscriber =
    Arc<dyn Fn(&str, Option<&dyn StoredValue>, Option<&dyn StoredValue>) + Send + Sync>;

/// Trait for backing stores
///
/// A store belongs to exactly one model instance. Implementations are not
/// expected to synchronize internally; callers sharing a model across
/// threads must lock it themselves.
pub trait BackingStore: Debug + Send + Sync {
    /// Get the value stored under `key`, or `None` if absent or null
    fn get(&self, key: &str) -> Result<Option<&dyn StoredValue>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// `None` records an explicit null.
    fn set(&mut self, key: &str, value: Option<Box<dyn StoredValue>>) -> Result<(), StoreError>;

    /// List stored entries, honoring [`BackingStore::return_only_changed_values`]
    fn enumerate(&self) -> Vec<(&str, Option<&dyn StoredValue>)>;

    /// Every stored entry, ignoring the change-tracking view
    fn entries(&self) -> Vec<(&str, Option<&dyn StoredValue>)>;

    /// Keys whose value was changed to null after initialization
    fn enumerate_keys_for_values_changed_to_nil(&self) -> Vec<String>;

    /// Remove every entry and all change tracking
    fn clear(&mut self);

    fn initialization_completed(&self) -> bool;

    /// Mark initialization as complete (or restart it).
    ///
    /// Every currently stored key is flagged as changed when `completed` is
    /// false and as unchanged when it is true.
    fn set_initialization_completed(&mut self, completed: bool);

    fn return_only_changed_values(&self) -> bool;

    fn set_return_only_changed_values(&mut self, only_changed: bool);

    /// Register a callback under `id`, replacing any callback with that id
    fn subscribe(&mut self, id: &str, subscriber: StoreSubscriber) -> Result<(), StoreError>;

    fn unsubscribe(&mut self, id: &str) -> Result<(), StoreError>;

    /// Deep copy of this store, contents and flags included
    fn clone_store(&self) -> Box<dyn BackingStore>;
}

/// Typed access on top of [`BackingStore`]
pub trait BackingStoreExt: BackingStore {
    /// Read `key` as a `T`.
    ///
    /// Returns `StoreError::TypeMismatch` when the stored value is of a
    /// different type.
    fn get_value<T>(&self, key: &str) -> Result<Option<T>, StoreError>
    where
        T: StoredValue + Clone,
    {
        match self.get(key)? {
            None => Ok(None),
            Some(value) => value
                .as_any()
                .downcast_ref::<T>()
                .cloned()
                .map(Some)
                .ok_or_else(|| StoreError::TypeMismatch {
                    key: key.to_string(),
                    expected: type_name::<T>(),
                }),
        }
    }

    fn set_value<T>(&mut self, key: &str, value: Option<T>) -> Result<(), StoreError>
    where
        T: StoredValue,
    {
        self.set(key, value.map(|v| Box::new(v) as Box<dyn StoredValue>))
    }
}

impl<S: BackingStore + ?Sized> BackingStoreExt for S {}

/// Creates the backing store for new model instances
pub trait BackingStoreFactory: Debug + Send + Sync {
    fn create_backing_store(&self) -> Box<dyn BackingStore>;
}

static BACKING_STORE_FACTORY: OnceCell<Box<dyn BackingStoreFactory>> = OnceCell::new();

/// Install the process-wide backing store factory.
///
/// Can be called once, before the first model is constructed. Later calls
/// (or a call after a model was already built with the default factory)
/// return `StoreError::FactoryAlreadySet`.
pub fn set_backing_store_factory(
    factory: impl BackingStoreFactory + 'static,
) -> Result<(), StoreError> {
    BACKING_STORE_FACTORY
        .set(Box::new(factory))
        .map_err(|_| StoreError::FactoryAlreadySet)
}

/// The process-wide backing store factory (in-memory unless configured)
pub fn backing_store_factory() -> &'static dyn BackingStoreFactory {
    BACKING_STORE_FACTORY
        .get_or_init(|| Box::new(InMemoryBackingStoreFactory::default()))
        .as_ref()
}

/// Owning handle to the backing store of one model instance.
///
/// Cloning deep-copies the store. Equality compares non-null entries and
/// ignores change-tracking flags, so an explicit null and an absent key are
/// equal. An empty additional-data map counts as absent.
#[derive(Debug)]
pub struct ModelStore(Box<dyn BackingStore>);

impl ModelStore {
    /// Create a store from the process-wide factory
    pub fn new() -> Self {
        Self(backing_store_factory().create_backing_store())
    }

    pub fn from_store(store: Box<dyn BackingStore>) -> Self {
        Self(store)
    }

    pub fn into_inner(self) -> Box<dyn BackingStore> {
        self.0
    }

    fn populated_entries(&self) -> Vec<(&str, &dyn StoredValue)> {
        let mut entries: Vec<(&str, &dyn StoredValue)> = self
            .0
            .entries()
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .filter(|(key, value)| !(*key == ADDITIONAL_DATA_KEY && is_empty_map(*value)))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

fn is_empty_map(value: &dyn StoredValue) -> bool {
    value
        .as_any()
        .downcast_ref::<serde_json::Map<String, serde_json::Value>>()
        .is_some_and(|map| map.is_empty())
}

impl Default for ModelStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ModelStore {
    fn clone(&self) -> Self {
        Self(self.0.clone_store())
    }
}

impl PartialEq for ModelStore {
    fn eq(&self, other: &Self) -> bool {
        let ours = self.populated_entries();
        let theirs = other.populated_entries();
        ours.len() == theirs.len()
            && ours
                .iter()
                .zip(theirs.iter())
                .all(|((ka, va), (kb, vb))| ka == kb && (*va).eq_dyn(*vb))
    }
}

impl Deref for ModelStore {
    type Target = dyn BackingStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl DerefMut for ModelStore {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0.as_mut()
    }
}
