use furever_domain::Role;
use strum_macros::{AsRefStr, Display, EnumIter};

/// An active portal session. Exists only after a complete registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user_name: String,
    role: Role,
}

impl Session {
    pub(crate) fn new(user_name: impl Into<String>, role: Role) -> Self {
        Self { user_name: user_name.into(), role }
    }

    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub const fn dashboard(&self) -> Dashboard {
        Dashboard::for_role(self.role)
    }

    #[must_use]
    pub fn greeting(&self) -> String {
        format!("Welcome, {}! ({})", self.user_name, self.role.title())
    }
}

/// The role-specific landing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Dashboard {
    PetOwner,
    Veterinarian,
    Shelter,
}

impl Dashboard {
    #[must_use]
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::PetOwner => Self::PetOwner,
            Role::Veterinarian => Self::Veterinarian,
            Role::Shelter => Self::Shelter,
        }
    }

    /// Tabs shown on the dashboard, in order.
    #[must_use]
    pub const fn tabs(self) -> &'static [&'static str] {
        match self {
            Self::PetOwner => &["about", "care", "products", "emergency", "feedback", "contact"],
            Self::Veterinarian => &["profile", "appointments", "cases"],
            Self::Shelter => &["gallery", "success", "events", "contact"],
        }
    }
}
