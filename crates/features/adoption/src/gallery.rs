//! Shelter gallery over the adoptable-pets fixture.

use furever_kernel::{Loadable, load_fixture};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ALL_SPECIES: &str = "all";

/// Species buttons offered above the gallery.
pub const SPECIES_FILTERS: [&str; 4] = [ALL_SPECIES, "dog", "cat", "rabbit"];

pub const NO_PETS_FOUND: &str = "No pets found matching your criteria.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptablePet {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub species: String,
    pub breed: String,
    pub age: String,
    pub gender: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub status: String,
    #[serde(default)]
    pub vaccinated: bool,
    #[serde(default)]
    pub spayed_neutered: bool,
    #[serde(default)]
    pub good_with_kids: bool,
    #[serde(default)]
    pub good_with_pets: bool,
}

impl AdoptablePet {
    /// Badge labels for the health and temperament flags that are set.
    #[must_use]
    pub fn badges(&self) -> Vec<&'static str> {
        [
            (self.vaccinated, "Vaccinated"),
            (self.spayed_neutered, "Spayed/Neutered"),
            (self.good_with_kids, "Good with Kids"),
            (self.good_with_pets, "Good with Pets"),
        ]
        .into_iter()
        .filter_map(|(set, label)| set.then_some(label))
        .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct PetsFixture {
    #[serde(default)]
    pets: Vec<AdoptablePet>,
}

/// Loads the gallery fixture (`{"pets": [...]}`).
pub async fn load_pets(path: impl AsRef<Path>) -> Loadable<Vec<AdoptablePet>> {
    load_fixture::<PetsFixture>(path).await.map(|fixture| fixture.pets)
}

/// Species selection plus free-text search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryFilter {
    pub species: String,
    pub search: String,
}

impl Default for GalleryFilter {
    fn default() -> Self {
        Self { species: ALL_SPECIES.to_owned(), search: String::new() }
    }
}

impl GalleryFilter {
    #[must_use]
    pub fn new(species: impl Into<String>, search: impl Into<String>) -> Self {
        Self { species: species.into(), search: search.into() }
    }

    /// Species must match exactly unless `all`; the search term is matched case-insensitively
    /// against name, breed, and description.
    #[must_use]
    pub fn matches(&self, pet: &AdoptablePet) -> bool {
        if self.species != ALL_SPECIES && pet.species != self.species {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();
        [&pet.name, &pet.breed, &pet.description]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    #[must_use]
    pub fn apply<'a>(&self, pets: &'a [AdoptablePet]) -> Vec<&'a AdoptablePet> {
        pets.iter().filter(|pet| self.matches(pet)).collect()
    }
}
