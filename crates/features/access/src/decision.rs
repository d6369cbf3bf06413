use furever_domain::{Role, RoleSet};
use std::fmt;

/// Rejection returned when a session's role is outside a feature's allowed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "This feature is only available for {} users. Your current role: {}",
    required_roles_label(.required),
    current_role_label(.current)
)]
pub struct AccessDenied {
    pub feature: String,
    /// Exactly the permission entry for `feature`.
    pub required: RoleSet,
    pub current: Option<Role>,
}

fn required_roles_label(required: &RoleSet) -> String {
    required.wire_names().join(" and ")
}

fn current_role_label(role: &Option<Role>) -> &'static str {
    role.map_or("none", Role::spoken)
}

/// Outcome of an access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// The feature has no permission entry.
    Open,
    /// The feature is gated and the role is a member.
    Granted,
    Denied(AccessDenied),
}

impl AccessDecision {
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Open | Self::Granted)
    }

    /// Converts into a `Result` for `?`-style callers.
    ///
    /// # Errors
    /// Returns the [`AccessDenied`] rejection when access was refused.
    pub fn into_result(self) -> Result<(), AccessDenied> {
        match self {
            Self::Open | Self::Granted => Ok(()),
            Self::Denied(denied) => Err(denied),
        }
    }
}

/// What following a service link does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Go to the link's destination.
    Navigate(String),
    /// The link is a placeholder; show this acknowledgment instead.
    Acknowledge(String),
    Denied(AccessDenied),
}

/// Availability badge shown next to a service in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Restricted(RoleSet),
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => f.write_str("Available"),
            Self::Restricted(roles) => write!(f, "{} only", roles.wire_names().join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denial_lists_roles_joined_with_and() {
        let denied = AccessDenied {
            feature: "Grooming".to_owned(),
            required: RoleSet::PET_OWNER | RoleSet::SHELTER,
            current: Some(Role::Veterinarian),
        };
        assert_eq!(
            denied.to_string(),
            "This feature is only available for pet-owner and shelter users. Your current role: veterinarian"
        );
    }

    #[test]
    fn denial_without_role_reports_none() {
        let denied = AccessDenied {
            feature: "Pet Products".to_owned(),
            required: RoleSet::PET_OWNER,
            current: None,
        };
        assert!(denied.to_string().ends_with("Your current role: none"));
    }

    #[test]
    fn availability_labels() {
        assert_eq!(Availability::Available.to_string(), "Available");
        assert_eq!(
            Availability::Restricted(RoleSet::PET_OWNER | RoleSet::SHELTER).to_string(),
            "pet-owner, shelter only"
        );
    }

    #[test]
    fn into_result_maps_denial() {
        assert_eq!(AccessDecision::Open.into_result(), Ok(()));
        assert_eq!(AccessDecision::Granted.into_result(), Ok(()));
        assert!(
            AccessDecision::Denied(AccessDenied {
                feature: "Grooming".to_owned(),
                required: RoleSet::SHELTER,
                current: None,
            })
            .into_result()
            .is_err()
        );
    }
}
