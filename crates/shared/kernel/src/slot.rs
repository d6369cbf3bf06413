//! Typed JSON access to the storage port.
//!
//! Reads are forgiving: a missing key, a store failure, or JSON that no longer matches the
//! expected shape all degrade to a fallback value and are only logged. Writes propagate
//! their errors so callers can tell the user a change was not saved.

use furever_storage::{KeyValueStore, StorageError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;
use tracing::{debug, warn};

#[furever_derive::furever_error]
pub enum SlotError {
    #[error("Storage failure{}: {source}", format_context(.context))]
    Storage { source: StorageError, context: Option<Cow<'static, str>> },

    #[error("Serialization failure{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Rejected input{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl SlotError {
    /// Shorthand for rejecting user input.
    pub fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Invalid { message: message.into(), context: None }
    }
}

/// Reads and decodes `key`, or `None` when missing, unreadable, or malformed.
pub fn load<T>(store: &dyn KeyValueStore, key: &str) -> Option<T>
where
    T: DeserializeOwned,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "Slot is empty");
            return None;
        },
        Err(err) => {
            warn!(key, error = %err, "Slot read failed, using fallback");
            return None;
        },
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, error = %err, "Slot holds malformed JSON, using fallback");
            None
        },
    }
}

/// Reads `key`, falling back to `fallback()` when nothing usable is stored.
pub fn load_or<T, F>(store: &dyn KeyValueStore, key: &str, fallback: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    load(store, key).unwrap_or_else(fallback)
}

/// Reads `key`, falling back to `T::default()`.
pub fn load_or_default<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    load_or(store, key, T::default)
}

/// Reads a JSON array under `key`, keeping every element that still decodes as `T`.
///
/// Used by read-modify-write paths: one bad record is dropped on the next save instead of
/// taking the whole list with it. `None` when the slot is missing or not an array.
pub fn load_list<T>(store: &dyn KeyValueStore, key: &str) -> Option<Vec<T>>
where
    T: DeserializeOwned,
{
    let raw: Vec<Value> = load(store, key)?;
    let total = raw.len();
    let items: Vec<T> =
        raw.into_iter().filter_map(|item| serde_json::from_value(item).ok()).collect();
    if items.len() < total {
        warn!(key, dropped = total - items.len(), "Skipped malformed entries");
    }
    Some(items)
}

/// [`load_list`], or an empty list.
pub fn load_list_or_default<T>(store: &dyn KeyValueStore, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
{
    load_list(store, key).unwrap_or_default()
}

/// Reads a JSON object under `key`, keeping every entry whose value decodes as `V`.
pub fn load_map<V>(store: &dyn KeyValueStore, key: &str) -> BTreeMap<String, V>
where
    V: DeserializeOwned,
{
    let Some(raw) = load::<BTreeMap<String, Value>>(store, key) else {
        return BTreeMap::new();
    };
    let total = raw.len();
    let entries: BTreeMap<String, V> = raw
        .into_iter()
        .filter_map(|(name, value)| serde_json::from_value(value).ok().map(|v| (name, v)))
        .collect();
    if entries.len() < total {
        warn!(key, dropped = total - entries.len(), "Skipped malformed entries");
    }
    entries
}

/// Encodes `value` as JSON and stores it under `key`.
///
/// # Errors
/// Returns [`SlotError::Json`] if encoding fails and [`SlotError::Storage`] if the write fails.
pub fn save<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), SlotError>
where
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value).context(format!("Encoding slot '{key}'"))?;
    store.set(key, &raw).context(format!("Writing slot '{key}'"))?;
    debug!(key, bytes = raw.len(), "Slot saved");
    Ok(())
}

/// Removes `key`.
///
/// # Errors
/// Returns [`SlotError::Storage`] if the store refuses the removal.
pub fn clear(store: &dyn KeyValueStore, key: &str) -> Result<(), SlotError> {
    store.remove(key).context(format!("Clearing slot '{key}'"))?;
    Ok(())
}

/// Inserts `item` at the front of `list` and drops entries beyond `cap`.
pub fn prepend_capped<T>(list: &mut Vec<T>, item: T, cap: usize) {
    list.insert(0, item);
    list.truncate(cap);
}
