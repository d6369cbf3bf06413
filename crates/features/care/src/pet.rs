//! The pet-owner dashboard's pet registration form and the public profile it publishes.

use crate::error::{CareError, CareErrorExt, require_filled};
use furever_domain::keys::{PET_OWNER_FORM, pet_public};
use furever_kernel::slot;
use furever_storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Longest handle kept after slugging, so the public key stays a valid storage key.
const MAX_HANDLE_LEN: usize = 64;

const FALLBACK_HANDLE: &str = "pet";

/// Contact placeholders written into a freshly published profile.
const PUBLISHED_IMAGE: &str = "/placeholder-user.jpg";
const PUBLISHED_PHONE: &str = "+8490xxxxxxx";

/// Shown on a public profile whose owner left a field empty.
const FALLBACK_NAME: &str = "Pet";
const FALLBACK_IMAGE: &str = "/placeholder.jpg";
const FALLBACK_PHONE: &str = "+84xxxxxxxxx";

pub const FOUND_PET_NOTICE: &str =
    "If you found this pet, please keep them safe and contact the owner immediately.";

/// Saved under `petOwnerFormData`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PetRegistration {
    pub pet_name: String,
    pub pet_species: String,
    pub pet_breed: String,
    pub pet_age: String,
    pub is_pet_registered: bool,
}

impl PetRegistration {
    #[must_use]
    pub fn load(store: &dyn KeyValueStore) -> Self {
        slot::load_or_default(store, PET_OWNER_FORM)
    }

    /// Persists the form as typed, registered or not.
    ///
    /// # Errors
    /// Returns [`CareError::Storage`] if the form could not be written.
    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), CareError> {
        slot::save(store, PET_OWNER_FORM, self).context("Saving pet registration")
    }

    /// Marks the pet registered once every field is filled in.
    ///
    /// # Errors
    /// Returns [`CareError::Incomplete`] naming the first blank field; the form is unchanged.
    pub fn register(&mut self) -> Result<(), CareError> {
        require_filled(&[
            ("pet name", self.pet_name.as_str()),
            ("species", self.pet_species.as_str()),
            ("breed", self.pet_breed.as_str()),
            ("age", self.pet_age.as_str()),
        ])?;
        self.is_pet_registered = true;
        Ok(())
    }

    /// Handle of the public profile: the pet's name, else the owner's, else `pet`.
    #[must_use]
    pub fn handle(&self, user_name: &str) -> String {
        let source = [self.pet_name.as_str(), user_name]
            .into_iter()
            .find(|name| !name.is_empty())
            .unwrap_or(FALLBACK_HANDLE);
        match slugify(source) {
            slug if slug.is_empty() => FALLBACK_HANDLE.to_owned(),
            slug => slug,
        }
    }

    /// Writes the public profile for this pet and returns its handle.
    ///
    /// Does nothing (and returns `None`) while the pet has no name.
    ///
    /// # Errors
    /// Returns [`CareError::Storage`] if the profile could not be written.
    pub fn publish(
        &self,
        store: &dyn KeyValueStore,
        user_name: &str,
    ) -> Result<Option<String>, CareError> {
        if self.pet_name.is_empty() {
            return Ok(None);
        }

        let handle = self.handle(user_name);
        let profile = PublicProfile {
            name: self.pet_name.clone(),
            species: self.pet_species.clone(),
            breed: self.pet_breed.clone(),
            image: PUBLISHED_IMAGE.to_owned(),
            owner_phone: PUBLISHED_PHONE.to_owned(),
            owner_zalo: PUBLISHED_PHONE.to_owned(),
            ..PublicProfile::default()
        };
        slot::save(store, &pet_public(&handle), &profile).context("Publishing pet profile")?;

        info!(handle = %handle, "Public pet profile published");
        Ok(Some(handle))
    }
}

/// Lowercases `text` and collapses every run of characters outside `[a-z0-9]` into `-`,
/// without leading or trailing dashes.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            slug.push(ch);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.truncate(MAX_HANDLE_LEN);
    slug.trim_end_matches('-').to_owned()
}

/// Read model saved under `pet-public-<handle>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicProfile {
    pub name: String,
    #[serde(rename = "type")]
    pub species: String,
    pub breed: String,
    pub image: String,
    pub color: String,
    pub last_seen: String,
    pub notes: String,
    pub owner_phone: String,
    pub owner_zalo: String,
}

/// What a finder sees after scanning the QR code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicCard {
    pub title: String,
    pub image: String,
    pub owner_phone: String,
    pub owner_zalo: String,
    /// `None` when nothing has been published under the handle.
    pub profile: Option<PublicProfile>,
}

impl PublicCard {
    #[must_use]
    pub fn call_link(&self) -> String {
        format!("tel:{}", self.owner_phone)
    }

    #[must_use]
    pub fn zalo_link(&self) -> String {
        format!("https://zalo.me/{}", self.owner_zalo)
    }
}

/// Loads the public profile for `handle`, filling placeholders for anything missing.
#[must_use]
pub fn public_card(store: &dyn KeyValueStore, handle: &str) -> PublicCard {
    let profile: Option<PublicProfile> = slot::load(store, &pet_public(handle));
    let pick = |value: Option<&String>, fallback: &str| -> String {
        value.filter(|v| !v.is_empty()).map_or_else(|| fallback.to_owned(), Clone::clone)
    };

    let name = pick(profile.as_ref().map(|p| &p.name), FALLBACK_NAME);
    let owner_phone = pick(profile.as_ref().map(|p| &p.owner_phone), FALLBACK_PHONE);
    PublicCard {
        title: format!("{name} · Public Profile"),
        image: pick(profile.as_ref().map(|p| &p.image), FALLBACK_IMAGE),
        owner_zalo: pick(profile.as_ref().map(|p| &p.owner_zalo), owner_phone.as_str()),
        owner_phone,
        profile,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use furever_storage::MemoryStore;

    fn filled() -> PetRegistration {
        PetRegistration {
            pet_name: "Mochi Bear".into(),
            pet_species: "Dog".into(),
            pet_breed: "Shiba Inu".into(),
            pet_age: "2".into(),
            is_pet_registered: false,
        }
    }

    #[test]
    fn register_requires_every_field() {
        let mut form = PetRegistration { pet_breed: " ".into(), ..filled() };
        let err = form.register().err().map(|e| e.to_string());
        assert!(err.is_some_and(|msg| msg.contains("breed is required")));
        assert!(!form.is_pet_registered);

        let mut form = filled();
        assert!(form.register().is_ok());
        assert!(form.is_pet_registered);
    }

    #[test]
    fn slugs() {
        assert_eq!(slugify("Mochi Bear"), "mochi-bear");
        assert_eq!(slugify("  Mr. Whiskers!! "), "mr-whiskers");
        assert_eq!(slugify("Đậu Đậu"), "u-u");
        assert_eq!(slugify("!!!"), "");
        assert!(slugify(&"x".repeat(300)).len() <= MAX_HANDLE_LEN);
    }

    #[test]
    fn handle_falls_back_to_owner_then_pet() {
        assert_eq!(filled().handle("Ana"), "mochi-bear");
        assert_eq!(PetRegistration::default().handle("Ana Lee"), "ana-lee");
        assert_eq!(PetRegistration::default().handle(""), "pet");
        assert_eq!(PetRegistration { pet_name: "***".into(), ..Default::default() }.handle("Ana"), "pet");
    }

    #[test]
    fn form_round_trips_through_store() -> Result<(), CareError> {
        let store = MemoryStore::new();
        let mut form = filled();
        form.register()?;
        form.save(&store)?;
        assert_eq!(PetRegistration::load(&store), form);
        Ok(())
    }

    #[test]
    fn published_profile_is_readable_by_handle() -> Result<(), CareError> {
        let store = MemoryStore::new();
        let handle = filled().publish(&store, "Ana")?;
        assert_eq!(handle.as_deref(), Some("mochi-bear"));

        let card = public_card(&store, "mochi-bear");
        assert_eq!(card.title, "Mochi Bear · Public Profile");
        assert_eq!(card.image, PUBLISHED_IMAGE);
        assert_eq!(card.call_link(), "tel:+8490xxxxxxx");
        assert_eq!(card.profile.map(|p| p.breed), Some("Shiba Inu".to_owned()));
        Ok(())
    }

    #[test]
    fn unknown_handle_shows_placeholders() {
        let store = MemoryStore::new();
        let card = public_card(&store, "ghost");
        assert_eq!(card.title, "Pet · Public Profile");
        assert_eq!(card.image, FALLBACK_IMAGE);
        assert_eq!(card.owner_phone, FALLBACK_PHONE);
        assert_eq!(card.zalo_link(), "https://zalo.me/+84xxxxxxxxx");
        assert!(card.profile.is_none());
    }

    #[test]
    fn unnamed_pet_is_not_published() -> Result<(), CareError> {
        let store = MemoryStore::new();
        assert_eq!(PetRegistration::default().publish(&store, "Ana")?, None);
        assert!(store.is_empty());
        Ok(())
    }
}
