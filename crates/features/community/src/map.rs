//! Pet-friendly places and their check-in counters (`map-checkins`).

use crate::error::{CommunityError, CommunityErrorExt};
use furever_domain::keys::MAP_CHECKINS;
use furever_kernel::slot;
use furever_storage::KeyValueStore;
use serde::Serialize;
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

pub const SUGGESTION_RECEIVED: &str =
    "Thanks! Your suggestion has been recorded. We will review it soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlaceKind {
    Cafe,
    Park,
    Hotel,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRules {
    pub has_separate_area: bool,
    pub leash_required: bool,
}

impl PlaceRules {
    #[must_use]
    pub const fn area_label(&self) -> &'static str {
        if self.has_separate_area { "Separate area" } else { "Shared area" }
    }

    #[must_use]
    pub const fn leash_label(&self) -> &'static str {
        if self.leash_required { "Leash required" } else { "Off-leash allowed" }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: PlaceKind,
    pub address: &'static str,
    #[serde(rename = "radiusRules")]
    pub rules: PlaceRules,
}

pub static PLACES: [Place; 3] = [
    Place {
        id: "p1",
        name: "Paws & Beans Cafe",
        kind: PlaceKind::Cafe,
        address: "12 Bark Street",
        rules: PlaceRules { has_separate_area: true, leash_required: false },
    },
    Place {
        id: "p2",
        name: "Green Meadow Park",
        kind: PlaceKind::Park,
        address: "45 Meadow Ave",
        rules: PlaceRules { has_separate_area: false, leash_required: true },
    },
    Place {
        id: "p3",
        name: "TailWag Hotel",
        kind: PlaceKind::Hotel,
        address: "77 Petway Blvd",
        rules: PlaceRules { has_separate_area: true, leash_required: true },
    },
];

/// Map filters. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceFilter {
    pub kind: Option<PlaceKind>,
    pub separate_area: Option<bool>,
    pub leash_required: Option<bool>,
    /// Matched case-insensitively against `"<name> <address>"`.
    pub query: String,
}

impl PlaceFilter {
    #[must_use]
    pub fn matches(&self, place: &Place) -> bool {
        if self.kind.is_some_and(|kind| kind != place.kind) {
            return false;
        }
        if self.separate_area.is_some_and(|wanted| wanted != place.rules.has_separate_area) {
            return false;
        }
        if self.leash_required.is_some_and(|wanted| wanted != place.rules.leash_required) {
            return false;
        }
        self.query.is_empty()
            || format!("{} {}", place.name, place.address)
                .to_lowercase()
                .contains(&self.query.to_lowercase())
    }

    #[must_use]
    pub fn apply<'a>(&self, places: &'a [Place]) -> Vec<&'a Place> {
        places.iter().filter(|place| self.matches(place)).collect()
    }
}

#[must_use]
pub fn place(id: &str) -> Option<&'static Place> {
    PLACES.iter().find(|place| place.id == id)
}

/// Check-in count per place id.
#[must_use]
pub fn checkins(store: &dyn KeyValueStore) -> BTreeMap<String, u32> {
    slot::load_map(store, MAP_CHECKINS)
}

/// Records a check-in and returns the place's new count.
///
/// # Errors
/// Returns [`CommunityError::NotFound`] for an unknown place, or [`CommunityError::Storage`].
pub fn check_in(store: &dyn KeyValueStore, place_id: &str) -> Result<u32, CommunityError> {
    let place =
        place(place_id).ok_or_else(|| CommunityError::not_found(format!("place '{place_id}'")))?;

    let mut counts = checkins(store);
    let count = counts.entry(place.id.to_owned()).or_default();
    *count = count.saturating_add(1);
    let count = *count;
    slot::save(store, MAP_CHECKINS, &counts).context("Saving check-in")?;

    debug!(place = place.id, count, "Checked in");
    Ok(count)
}
