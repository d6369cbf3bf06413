use crate::role::Role;
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// A set of roles, used as the value type of feature permissions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct RoleSet: u8 {
        const PET_OWNER = 1 << 0;
        const VETERINARIAN = 1 << 1;
        const SHELTER = 1 << 2;

        const ALL = Self::PET_OWNER.bits() | Self::VETERINARIAN.bits() | Self::SHELTER.bits();
    }
}

impl RoleSet {
    #[must_use]
    pub const fn of(role: Role) -> Self {
        match role {
            Role::PetOwner => Self::PET_OWNER,
            Role::Veterinarian => Self::VETERINARIAN,
            Role::Shelter => Self::SHELTER,
        }
    }

    #[must_use]
    pub const fn allows(self, role: Role) -> bool {
        self.contains(Self::of(role))
    }

    /// Member roles in declaration order (`pet-owner`, `veterinarian`, `shelter`).
    pub fn roles(self) -> impl Iterator<Item = Role> {
        Role::ALL.into_iter().filter(move |role| self.allows(*role))
    }

    /// Wire names of the members, in declaration order.
    #[must_use]
    pub fn wire_names(self) -> Vec<&'static str> {
        self.roles().map(<&'static str>::from).collect()
    }
}

impl From<Role> for RoleSet {
    fn from(role: Role) -> Self {
        Self::of(role)
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, role| set | Self::of(role))
    }
}

impl fmt::Display for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.wire_names().join(", "))
    }
}

impl Serialize for RoleSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.roles())
    }
}

impl<'de> Deserialize<'de> for RoleSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let roles = Vec::<Role>::deserialize(deserializer)?;
        Ok(roles.into_iter().collect())
    }
}
