//! # Access
//!
//! Decides whether the current session may open a portal feature.
//!
//! Features are matched by their exact display name. A feature without a permission entry is
//! open to everyone, including visitors who have not picked a role yet. A gated feature is
//! open only to sessions whose role is in the entry's [`RoleSet`].
//!
//! ```rust
//! use furever_access::{AccessDecision, FeaturePermissions};
//! use furever_domain::Role;
//!
//! let permissions = FeaturePermissions::standard();
//! assert!(permissions.check("Pet Adoption", Some(Role::Shelter)).is_allowed());
//!
//! let AccessDecision::Denied(denied) = permissions.check("Veterinary Care", Some(Role::PetOwner))
//! else {
//!     unreachable!()
//! };
//! assert_eq!(
//!     denied.to_string(),
//!     "This feature is only available for veterinarian users. Your current role: pet owner"
//! );
//! ```

mod decision;
mod permissions;

pub use decision::{AccessDecision, AccessDenied, Availability, LinkOutcome};
pub use furever_domain::{Role, RoleSet};
pub use permissions::FeaturePermissions;
