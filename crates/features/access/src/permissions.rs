use crate::decision::{AccessDecision, AccessDenied, Availability, LinkOutcome};
use furever_domain::features::{
    EMERGENCY_SERVICES, GROOMING, PET_ADOPTION, PET_PRODUCTS, PET_TRAINING, VETERINARY_CARE,
};
use furever_domain::{Role, RoleSet};
use std::borrow::Cow;
use tracing::debug;

/// Static mapping from feature name to the roles allowed to open it.
///
/// Built once and never mutated afterwards; lookups compare names byte-for-byte.
#[derive(Debug, Clone, Default)]
pub struct FeaturePermissions {
    entries: Vec<(Cow<'static, str>, RoleSet)>,
}

impl FeaturePermissions {
    /// An empty table: every feature is open.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The portal's service permissions.
    #[must_use]
    pub fn standard() -> Self {
        let owner_or_shelter = RoleSet::PET_OWNER | RoleSet::SHELTER;
        Self::new()
            .with(VETERINARY_CARE, RoleSet::VETERINARIAN)
            .with(EMERGENCY_SERVICES, RoleSet::VETERINARIAN)
            .with(PET_TRAINING, owner_or_shelter)
            .with(GROOMING, owner_or_shelter)
            .with(PET_ADOPTION, owner_or_shelter)
            .with(PET_PRODUCTS, RoleSet::PET_OWNER)
    }

    /// Adds (or replaces) the entry for `feature`.
    #[must_use]
    pub fn with(mut self, feature: impl Into<Cow<'static, str>>, roles: RoleSet) -> Self {
        let feature = feature.into();
        match self.entries.iter_mut().find(|(name, _)| *name == feature) {
            Some(entry) => entry.1 = roles,
            None => self.entries.push((feature, roles)),
        }
        self
    }

    /// Roles required for `feature`, or `None` if it is ungated.
    #[must_use]
    pub fn required(&self, feature: &str) -> Option<RoleSet> {
        self.entries.iter().find(|(name, _)| name == feature).map(|(_, roles)| *roles)
    }

    /// Gated feature names in insertion order.
    pub fn gated(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_ref())
    }

    pub fn check(&self, feature: &str, role: Option<Role>) -> AccessDecision {
        let Some(required) = self.required(feature) else {
            return AccessDecision::Open;
        };

        match role {
            Some(role) if required.allows(role) => AccessDecision::Granted,
            _ => {
                debug!(feature, role = ?role, required = %required, "Access denied");
                AccessDecision::Denied(AccessDenied {
                    feature: feature.to_owned(),
                    required,
                    current: role,
                })
            },
        }
    }

    /// Follows a service link: navigate, acknowledge a placeholder (`#` or empty), or deny.
    pub fn follow_link(&self, feature: &str, href: &str, role: Option<Role>) -> LinkOutcome {
        if let AccessDecision::Denied(denied) = self.check(feature, role) {
            return LinkOutcome::Denied(denied);
        }

        if href.is_empty() || href == "#" {
            LinkOutcome::Acknowledge(format!(
                "Welcome to {feature}! This feature is available for your role."
            ))
        } else {
            LinkOutcome::Navigate(href.to_owned())
        }
    }

    pub fn availability(&self, feature: &str, role: Option<Role>) -> Availability {
        match self.check(feature, role) {
            AccessDecision::Open | AccessDecision::Granted => Availability::Available,
            AccessDecision::Denied(denied) => Availability::Restricted(denied.required),
        }
    }
}
