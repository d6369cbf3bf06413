use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// The three kinds of portal user. A session carries at most one.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Role {
    PetOwner,
    Veterinarian,
    Shelter,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::PetOwner, Self::Veterinarian, Self::Shelter];

    /// Wire name with `-` replaced by a space, as shown in user-facing messages.
    #[must_use]
    pub const fn spoken(self) -> &'static str {
        match self {
            Self::PetOwner => "pet owner",
            Self::Veterinarian => "veterinarian",
            Self::Shelter => "shelter",
        }
    }

    /// Title used on the role picker and dashboards.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::PetOwner => "Pet Owner",
            Self::Veterinarian => "Veterinarian",
            Self::Shelter => "Animal Shelter",
        }
    }
}
