use crate::error::{IdentityError, IdentityErrorExt};
use crate::session::Session;
use furever_domain::Role;
use furever_domain::keys::HOMEPAGE_FORM;
use furever_kernel::slot;
use furever_storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use tracing::info;

/// The landing-page form: a display name and the role the user picked.
///
/// Persisted as `{"userName": "...", "userType": "pet-owner"}`; an unpicked role is stored
/// as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Registration {
    pub user_name: String,
    #[serde(with = "role_or_blank")]
    pub user_type: Option<Role>,
}

impl Registration {
    #[must_use]
    pub fn new(user_name: impl Into<String>, user_type: Option<Role>) -> Self {
        Self { user_name: user_name.into(), user_type }
    }

    /// Restores the saved form, or an empty one.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        slot::load_or_default(store, HOMEPAGE_FORM)
    }

    /// # Errors
    /// Returns [`IdentityError::Storage`] if the form could not be written.
    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), IdentityError> {
        slot::save(store, HOMEPAGE_FORM, self).context("Saving registration form")
    }

    /// Validates the form and opens a session for the chosen role.
    ///
    /// The name is trimmed; a blank name or a missing role leaves the user on the landing page.
    ///
    /// # Errors
    /// Returns [`IdentityError::Incomplete`] naming the missing field.
    pub fn start(&self) -> Result<Session, IdentityError> {
        let name = self.user_name.trim();
        if name.is_empty() {
            return Err(IdentityError::Incomplete {
                message: "Please enter your name".into(),
                context: None,
            });
        }

        let Some(role) = self.user_type else {
            return Err(IdentityError::Incomplete {
                message: "Please select the user category you belong to".into(),
                context: None,
            });
        };

        info!(role = %role, "Session started");
        Ok(Session::new(name, role))
    }
}

/// Registers, persists, and starts a session in one step.
///
/// # Errors
/// Returns [`IdentityError::Incomplete`] for an invalid form (nothing is saved), or
/// [`IdentityError::Storage`] if saving fails.
pub fn register(
    store: &dyn KeyValueStore,
    user_name: &str,
    role: Role,
) -> Result<Session, IdentityError> {
    let form = Registration::new(user_name.trim(), Some(role));
    let session = form.start()?;
    form.save(store)?;
    Ok(session)
}

/// The session restored from the saved form, if it is complete.
pub fn current(store: &dyn KeyValueStore) -> Option<Session> {
    Registration::load(store).start().ok()
}

/// Forgets the saved form ("Switch User").
///
/// # Errors
/// Returns [`IdentityError::Storage`] if the store refuses the removal.
pub fn sign_out(store: &dyn KeyValueStore) -> Result<(), IdentityError> {
    slot::clear(store, HOMEPAGE_FORM).context("Clearing registration form")?;
    info!("Signed out");
    Ok(())
}

mod role_or_blank {
    use furever_domain::Role;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub(super) fn serialize<S>(role: &Option<Role>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(role.map_or("", <&'static str>::from))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        Ok(Role::from_str(&raw).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use furever_storage::MemoryStore;

    #[test]
    fn blank_name_is_rejected() {
        let form = Registration::new("   ", Some(Role::Shelter));
        assert!(matches!(form.start(), Err(IdentityError::Incomplete { .. })));
    }

    #[test]
    fn missing_role_is_rejected() {
        let form = Registration::new("Ana", None);
        assert!(matches!(form.start(), Err(IdentityError::Incomplete { .. })));
    }

    #[test]
    fn wire_format_matches_saved_form() -> Result<(), serde_json::Error> {
        let form = Registration::new("Ana", Some(Role::PetOwner));
        assert_eq!(serde_json::to_string(&form)?, r#"{"userName":"Ana","userType":"pet-owner"}"#);

        let blank: Registration = serde_json::from_str(r#"{"userName":"Ana","userType":""}"#)?;
        assert_eq!(blank.user_type, None);

        let unknown: Registration = serde_json::from_str(r#"{"userType":"admin"}"#)?;
        assert_eq!(unknown, Registration::default());
        Ok(())
    }

    #[test]
    fn register_persists_and_restores() -> Result<(), IdentityError> {
        let store = MemoryStore::new();
        let session = register(&store, "  Minh ", Role::Veterinarian)?;
        assert_eq!(session.user_name(), "Minh");

        assert_eq!(current(&store), Some(session));
        sign_out(&store)?;
        assert_eq!(current(&store), None);
        Ok(())
    }

    #[test]
    fn invalid_registration_saves_nothing() {
        let store = MemoryStore::new();
        assert!(register(&store, "", Role::Shelter).is_err());
        assert_eq!(Registration::load(&store), Registration::default());
    }
}
