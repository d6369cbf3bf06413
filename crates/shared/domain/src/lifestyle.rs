//! Lifestyle vocabulary shared by adoption candidates and adopter profiles.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Energy {
    Low,
    #[default]
    Medium,
    High,
}

/// Living space, either what a home offers or what a pet needs.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Space {
    Small,
    #[default]
    Medium,
    Large,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn defaults_are_medium() {
        assert_eq!(Energy::default(), Energy::Medium);
        assert_eq!(Space::default(), Space::Medium);
    }

    #[test]
    fn parse_is_case_insensitive() -> Result<(), strum::ParseError> {
        assert_eq!(Energy::from_str("HIGH")?, Energy::High);
        assert_eq!(Space::from_str("Small")?, Space::Small);
        Ok(())
    }
}
