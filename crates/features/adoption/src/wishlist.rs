use crate::error::{AdoptionError, AdoptionErrorExt};
use furever_domain::keys::PET_WISHLIST;
use furever_kernel::slot;
use furever_storage::KeyValueStore;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistChange {
    Added,
    Removed,
}

impl WishlistChange {
    #[must_use]
    pub fn message(self, name: &str) -> String {
        match self {
            Self::Added => format!("{name} has been added to your wishlist! ❤️"),
            Self::Removed => format!("{name} has been removed from your wishlist."),
        }
    }
}

/// Saved gallery pet ids, in the order they were added.
#[must_use]
pub fn ids(store: &dyn KeyValueStore) -> Vec<u32> {
    slot::load_list_or_default(store, PET_WISHLIST)
}

#[must_use]
pub fn contains(store: &dyn KeyValueStore, pet_id: u32) -> bool {
    ids(store).contains(&pet_id)
}

/// Adds `pet_id` if absent, removes it otherwise.
///
/// # Errors
/// Returns [`AdoptionError::Storage`] if the wishlist could not be written.
pub fn toggle(store: &dyn KeyValueStore, pet_id: u32) -> Result<WishlistChange, AdoptionError> {
    let mut wishlist = ids(store);
    let change = if let Some(pos) = wishlist.iter().position(|id| *id == pet_id) {
        wishlist.remove(pos);
        WishlistChange::Removed
    } else {
        wishlist.push(pet_id);
        WishlistChange::Added
    };

    slot::save(store, PET_WISHLIST, &wishlist).context("Saving wishlist")?;
    info!(pet_id, ?change, size = wishlist.len(), "Wishlist updated");
    Ok(change)
}

#[cfg(test)]
mod tests {
    use super::*;
    use furever_storage::MemoryStore;

    #[test]
    fn toggle_adds_then_removes() -> Result<(), AdoptionError> {
        let store = MemoryStore::new();
        assert_eq!(toggle(&store, 4)?, WishlistChange::Added);
        assert_eq!(toggle(&store, 2)?, WishlistChange::Added);
        assert_eq!(ids(&store), [4, 2]);

        assert_eq!(toggle(&store, 4)?, WishlistChange::Removed);
        assert!(!contains(&store, 4));
        assert!(contains(&store, 2));
        Ok(())
    }

    #[test]
    fn messages() {
        assert_eq!(WishlistChange::Added.message("Max"), "Max has been added to your wishlist! ❤️");
        assert_eq!(WishlistChange::Removed.message("Max"), "Max has been removed from your wishlist.");
    }
}
