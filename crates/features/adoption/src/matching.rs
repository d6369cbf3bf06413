//! Lifestyle questionnaire and the candidate filter behind it.

use crate::error::AdoptionError;
use furever_domain::{Energy, Space};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use tracing::debug;

/// Longest working day the questionnaire accepts.
pub const MAX_WORK_HOURS: u8 = 16;

/// Threshold above which high-energy pets are filtered out.
const LONG_WORK_DAY: u8 = 10;

pub const NO_MATCHES: &str = "No matches yet. Adjust your lifestyle preferences.";

/// A pet listed on the matching page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionCandidate {
    pub id: Cow<'static, str>,
    pub name: Cow<'static, str>,
    #[serde(rename = "type")]
    pub species: Cow<'static, str>,
    pub energy: Energy,
    pub good_with_kids: bool,
    pub space_need: Space,
    pub image: Cow<'static, str>,
}

/// The shelter's current candidates.
pub static CANDIDATES: [AdoptionCandidate; 3] = [
    AdoptionCandidate {
        id: Cow::Borrowed("a1"),
        name: Cow::Borrowed("Buddy"),
        species: Cow::Borrowed("dog"),
        energy: Energy::High,
        good_with_kids: true,
        space_need: Space::Large,
        image: Cow::Borrowed("/adoptable-golden-retriever-buddy.jpg"),
    },
    AdoptionCandidate {
        id: Cow::Borrowed("a2"),
        name: Cow::Borrowed("Bella"),
        species: Cow::Borrowed("dog"),
        energy: Energy::Medium,
        good_with_kids: true,
        space_need: Space::Medium,
        image: Cow::Borrowed("/adoptable-labrador-mix-bella.jpg"),
    },
    AdoptionCandidate {
        id: Cow::Borrowed("a3"),
        name: Cow::Borrowed("Whiskers"),
        species: Cow::Borrowed("cat"),
        energy: Energy::Low,
        good_with_kids: false,
        space_need: Space::Small,
        image: Cow::Borrowed("/adoptable-maine-coon-whiskers.jpg"),
    },
];

/// Looks up a candidate by id.
#[must_use]
pub fn candidate(id: &str) -> Option<&'static AdoptionCandidate> {
    CANDIDATES.iter().find(|pet| pet.id == id)
}

/// Answers to the lifestyle questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleProfile {
    work_hours: u8,
    pub has_kids: bool,
    pub home_space: Space,
    pub preferred_energy: Energy,
}

impl Default for LifestyleProfile {
    fn default() -> Self {
        Self {
            work_hours: 8,
            has_kids: false,
            home_space: Space::Medium,
            preferred_energy: Energy::Medium,
        }
    }
}

impl LifestyleProfile {
    /// Builds a profile, rejecting work hours outside `0..=16`.
    ///
    /// # Errors
    /// Returns [`AdoptionError::InvalidProfile`] for out-of-range hours.
    pub fn new(
        work_hours: u8,
        has_kids: bool,
        home_space: Space,
        preferred_energy: Energy,
    ) -> Result<Self, AdoptionError> {
        Ok(Self { work_hours: validate_hours(work_hours)?, has_kids, home_space, preferred_energy })
    }

    #[must_use]
    pub const fn work_hours(&self) -> u8 {
        self.work_hours
    }

    /// # Errors
    /// Returns [`AdoptionError::InvalidProfile`] for out-of-range hours; the profile is unchanged.
    pub fn set_work_hours(&mut self, hours: u8) -> Result<(), AdoptionError> {
        self.work_hours = validate_hours(hours)?;
        Ok(())
    }

    /// Every rule that rules `pet` out for this household, in evaluation order.
    #[must_use]
    pub fn exclusions(&self, pet: &AdoptionCandidate) -> Vec<Exclusion> {
        let mut reasons = Vec::new();
        if self.has_kids && !pet.good_with_kids {
            reasons.push(Exclusion::NotGoodWithKids);
        }
        if self.home_space == Space::Small && pet.space_need == Space::Large {
            reasons.push(Exclusion::NeedsMoreSpace);
        }
        // Medium means "no preference".
        if self.preferred_energy != Energy::Medium && self.preferred_energy != pet.energy {
            reasons.push(Exclusion::EnergyMismatch {
                wanted: self.preferred_energy,
                actual: pet.energy,
            });
        }
        if self.work_hours > LONG_WORK_DAY && pet.energy == Energy::High {
            reasons.push(Exclusion::TooLongAlone);
        }
        reasons
    }

    #[must_use]
    pub fn accepts(&self, pet: &AdoptionCandidate) -> bool {
        self.exclusions(pet).is_empty()
    }

    /// Keeps the candidates no rule excludes, preserving their order.
    #[must_use]
    pub fn filter<'a>(&self, pets: &'a [AdoptionCandidate]) -> Vec<&'a AdoptionCandidate> {
        let matches: Vec<_> = pets.iter().filter(|pet| self.accepts(pet)).collect();
        debug!(profile = ?self, candidates = pets.len(), matches = matches.len(), "Matched candidates");
        matches
    }
}

fn validate_hours(hours: u8) -> Result<u8, AdoptionError> {
    if hours > MAX_WORK_HOURS {
        return Err(AdoptionError::InvalidProfile {
            message: format!("work hours must be between 0 and {MAX_WORK_HOURS}, got {hours}")
                .into(),
            context: None,
        });
    }
    Ok(hours)
}

/// Why a candidate was filtered out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    NotGoodWithKids,
    NeedsMoreSpace,
    EnergyMismatch { wanted: Energy, actual: Energy },
    TooLongAlone,
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotGoodWithKids => f.write_str("not good with kids"),
            Self::NeedsMoreSpace => f.write_str("needs a large home"),
            Self::EnergyMismatch { wanted, actual } => {
                write!(f, "{actual} energy, you prefer {wanted}")
            },
            Self::TooLongAlone => f.write_str("high energy pet, too many hours alone"),
        }
    }
}

/// Result panel of the matching page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MatchView<'a> {
    /// The questionnaire has not been submitted yet.
    #[default]
    NotComputed,
    Computed(Vec<&'a AdoptionCandidate>),
}

impl<'a> MatchView<'a> {
    #[must_use]
    pub fn compute(profile: &LifestyleProfile, pets: &'a [AdoptionCandidate]) -> Self {
        Self::Computed(profile.filter(pets))
    }

    #[must_use]
    pub fn matches(&self) -> &[&'a AdoptionCandidate] {
        match self {
            Self::NotComputed => &[],
            Self::Computed(matches) => matches,
        }
    }

    /// Text to show instead of cards, if any.
    #[must_use]
    pub fn empty_message(&self) -> Option<&'static str> {
        match self {
            Self::Computed(matches) if matches.is_empty() => Some(NO_MATCHES),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(matches: &[&'a AdoptionCandidate]) -> Vec<&'a str> {
        matches.iter().map(|pet| pet.name.as_ref()).collect()
    }

    #[test]
    fn default_profile_matches_everyone() {
        let profile = LifestyleProfile::default();
        assert_eq!(profile.work_hours(), 8);
        assert_eq!(names(&profile.filter(&CANDIDATES)), ["Buddy", "Bella", "Whiskers"]);
    }

    #[test]
    fn hours_above_sixteen_are_rejected() {
        assert!(matches!(
            LifestyleProfile::new(17, false, Space::Medium, Energy::Medium),
            Err(AdoptionError::InvalidProfile { .. })
        ));

        let mut profile = LifestyleProfile::default();
        assert!(profile.set_work_hours(40).is_err());
        assert_eq!(profile.work_hours(), 8);
        assert!(profile.set_work_hours(0).is_ok());
    }

    #[test]
    fn exclusions_explain_each_rule() -> Result<(), AdoptionError> {
        let profile = LifestyleProfile::new(12, true, Space::Small, Energy::Low)?;
        let buddy = candidate("a1").map(|pet| profile.exclusions(pet));
        assert_eq!(
            buddy,
            Some(vec![
                Exclusion::NeedsMoreSpace,
                Exclusion::EnergyMismatch { wanted: Energy::Low, actual: Energy::High },
                Exclusion::TooLongAlone,
            ])
        );
        assert_eq!(
            Exclusion::EnergyMismatch { wanted: Energy::Low, actual: Energy::High }.to_string(),
            "high energy, you prefer low"
        );
        Ok(())
    }

    #[test]
    fn view_separates_pending_from_empty() -> Result<(), AdoptionError> {
        let pending = MatchView::default();
        assert!(pending.matches().is_empty());
        assert_eq!(pending.empty_message(), None);

        let picky = LifestyleProfile::new(12, true, Space::Small, Energy::High)?;
        let view = MatchView::compute(&picky, &CANDIDATES);
        assert_eq!(view, MatchView::Computed(vec![]));
        assert_eq!(view.empty_message(), Some(NO_MATCHES));
        Ok(())
    }

    #[test]
    fn candidate_lookup() {
        assert_eq!(candidate("a2").map(|pet| pet.name.as_ref()), Some("Bella"));
        assert_eq!(candidate("A2"), None);
    }
}
