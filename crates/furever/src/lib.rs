//! Facade crate for `FurEver Care` features and shared modules.
//! Re-exports domain/kernel primitives and composes the feature slices behind [`Portal`].
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! ```rust
//! use furever::Portal;
//! use furever::domain::Role;
//! use furever::features::identity;
//!
//! let portal = Portal::in_memory();
//! identity::register(portal.store(), "Ana", Role::PetOwner).ok();
//! assert!(portal.check("Pet Products").is_allowed());
//! ```

mod error;
mod portal;

pub use crate::error::{PortalError, PortalErrorExt};
pub use crate::portal::Portal;
pub use furever_domain as domain;
pub use furever_kernel as kernel;
pub use furever_storage as storage;

/// Feature slices.
pub mod features {
    pub use furever_access as access;
    pub use furever_adoption as adoption;
    pub use furever_care as care;
    pub use furever_catalog as catalog;
    pub use furever_community as community;
    pub use furever_identity as identity;

    /// Slices compiled into this build.
    pub const ENABLED: &[&str] =
        &["access", "identity", "adoption", "catalog", "community", "care"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}
