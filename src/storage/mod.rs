//! Durable string key/value storage for preferences.
//!
//! Backends only see flat string keys and string values; encoding of numbers
//! and lists is the preference store's concern.

use std::collections::BTreeMap;

use crate::error::StorageError;

mod file;

pub use file::{default_store_path, FileStore};

/// Flat string-keyed durable store.
pub trait KeyValueStore {
    /// Stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write one value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Write several values as one logical update.
    ///
    /// Backends with expensive flushes override this to write once.
    fn set_many(&mut self, entries: &[(&str, String)]) -> Result<(), StorageError> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

/// In-process store, used for tests and ephemeral sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with `(key, value)` pairs.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Snapshot of every stored value.
    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn set_many(&mut self, entries: &[(&str, String)]) -> Result<(), StorageError> {
        (**self).set_many(entries)
    }
}
