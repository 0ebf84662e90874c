//! Persisted key/value storage.
//!
//! The editor keeps small JSON blobs (panel state, help-center state) under
//! fixed keys, the way a browser keeps them in local storage. Reads are
//! tolerant: missing or malformed entries fall back to defaults. Writes merge
//! into the existing object so unrelated fields written by other components
//! survive.

mod error;
mod file;
mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub use error::StorageError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Backing store for persisted JSON values.
pub trait Store {
    /// Returns the value under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Replaces the value under `key`.
    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError>;
}

/// Reads `key` as `T`, filling anything missing or unreadable with defaults.
///
/// Partial objects keep the fields they do have when `T` uses `#[serde(default)]`.
pub fn read_or_default<T>(store: &dyn Store, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match store.get(key) {
        Ok(Some(value)) => serde_json::from_value(value).unwrap_or_else(|e| {
            log::warn!("ignoring malformed stored value under '{key}': {e}");
            T::default()
        }),
        Ok(None) => T::default(),
        Err(e) => {
            log::warn!("failed to read '{key}' from storage: {e}");
            T::default()
        }
    }
}

/// Shallow-merges the fields of `patch` into the object stored under `key`.
///
/// Fields already stored but absent from `patch` are kept. A stored value that
/// is not an object is replaced.
pub fn merge_write<T>(store: &mut dyn Store, key: &str, patch: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
{
    let Value::Object(fields) = serde_json::to_value(patch)? else {
        return Err(StorageError::NotAnObject { key: key.to_string() });
    };

    let mut merged = match store.get(key)? {
        Some(Value::Object(existing)) => existing,
        _ => Map::new(),
    };
    for (field, value) in fields {
        merged.insert(field, value);
    }

    store.set(key, Value::Object(merged))
}
