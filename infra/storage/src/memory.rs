use crate::error::StorageError;
use crate::key::StorageKey;
use crate::store::KeyValueStore;
use fxhash::FxHashMap;
use parking_lot::RwLock;

/// Process-local store. Used by tests and by sessions started without a data directory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<FxHashMap<StorageKey, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let key = StorageKey::try_from(key)?;
        Ok(self.entries.read().get(&key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let key = StorageKey::try_from(key)?;
        self.entries.write().insert(key, value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let key = StorageKey::try_from(key)?;
        self.entries.write().remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() -> Result<(), StorageError> {
        let store = MemoryStore::new();
        assert_eq!(store.get("petWishlist")?, None);

        store.set("petWishlist", "[1,2]")?;
        assert_eq!(store.get("petWishlist")?.as_deref(), Some("[1,2]"));
        assert!(store.contains("petWishlist")?);

        store.remove("petWishlist")?;
        store.remove("petWishlist")?;
        assert_eq!(store.len(), 0);
        Ok(())
    }

    #[test]
    fn keys_are_case_sensitive() -> Result<(), StorageError> {
        let store = MemoryStore::new();
        store.set("memories-items", "a")?;
        assert_eq!(store.get("Memories-Items")?, None);
        Ok(())
    }

    #[test]
    fn invalid_key_is_rejected() {
        let store = MemoryStore::new();
        assert!(matches!(store.set("../x", "v"), Err(StorageError::InvalidKey { .. })));
    }
}
