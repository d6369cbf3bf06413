use crate::error::StorageError;
use std::sync::Arc;

/// The storage port every panel persists through.
///
/// Values are opaque strings (the portal stores JSON text). A missing key is `Ok(None)`,
/// never an error. Removing a missing key is a no-op.
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    /// Returns [`StorageError::InvalidKey`] for malformed keys, or a backend error.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns [`StorageError::InvalidKey`] for malformed keys, or a backend error.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes `key` if present.
    ///
    /// # Errors
    /// Returns [`StorageError::InvalidKey`] for malformed keys, or a backend error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// # Errors
    /// Same as [`KeyValueStore::get`].
    fn contains(&self, key: &str) -> Result<bool, StorageError> {
        self.get(key).map(|v| v.is_some())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
