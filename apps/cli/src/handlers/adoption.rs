use super::ready;
use crate::args::WishlistAction;
use anyhow::{Context, Result};
use chrono::Utc;
use furever::Portal;
use furever::domain::features::PET_ADOPTION;
use furever::domain::{Energy, Space};
use furever::features::adoption::gallery::{GalleryFilter, NO_PETS_FOUND};
use furever::features::adoption::interests::{self, NO_INTERESTS};
use furever::features::adoption::matching::{self, CANDIDATES, LifestyleProfile, MatchView};
use furever::features::adoption::wishlist;

pub(crate) fn matches(
    portal: &Portal,
    hours: u8,
    kids: bool,
    space: Space,
    energy: Energy,
    explain: bool,
) -> Result<()> {
    portal.require(PET_ADOPTION)?;
    let profile = LifestyleProfile::new(hours, kids, space, energy)?;

    let view = MatchView::compute(&profile, &CANDIDATES);
    for pet in view.matches() {
        println!(
            "{} [{}] {}, {} energy, needs {} space{}",
            pet.name,
            pet.id,
            pet.species,
            pet.energy,
            pet.space_need,
            if pet.good_with_kids { ", good with kids" } else { "" }
        );
    }
    if let Some(message) = view.empty_message() {
        println!("{message}");
    }

    if explain {
        for pet in CANDIDATES.iter().filter(|pet| !profile.accepts(pet)) {
            let reasons: Vec<String> =
                profile.exclusions(pet).iter().map(ToString::to_string).collect();
            println!("  excluded {}: {}", pet.name, reasons.join("; "));
        }
    }
    Ok(())
}

pub(crate) fn interest(portal: &Portal, pet_id: &str) -> Result<()> {
    portal.require(PET_ADOPTION)?;
    let pet = matching::candidate(pet_id)
        .with_context(|| format!("No adoption candidate with id '{pet_id}'"))?;

    let record = interests::confirm(portal.store(), pet, Utc::now())?;
    println!("{}", record.acknowledgment());
    Ok(())
}

pub(crate) fn interests(portal: &Portal) {
    let log = interests::list(portal.store());
    if log.is_empty() {
        println!("{NO_INTERESTS}");
    }
    for record in log {
        println!("{} [{}] {}", record.name, record.id, record.when.format("%Y-%m-%d %H:%M UTC"));
    }
}

pub(crate) async fn wishlist(portal: &Portal, action: WishlistAction) -> Result<()> {
    portal.require(PET_ADOPTION)?;
    let pets = portal.pets().await.into_ready().unwrap_or_default();
    let name_of = |id: u32| {
        pets.iter()
            .find(|pet| pet.id == id)
            .map_or_else(|| format!("Pet #{id}"), |pet| pet.name.clone())
    };

    match action {
        WishlistAction::List => {
            let ids = wishlist::ids(portal.store());
            if ids.is_empty() {
                println!("Your wishlist is empty.");
            }
            for id in ids {
                println!("{id}: {}", name_of(id));
            }
        },
        WishlistAction::Toggle { id } => {
            let change = wishlist::toggle(portal.store(), id)?;
            println!("{}", change.message(&name_of(id)));
        },
    }
    Ok(())
}

pub(crate) async fn pets(portal: &Portal, species: String, search: String) -> Result<()> {
    portal.require(PET_ADOPTION)?;
    let pets = ready(portal.pets().await, "adoptable pets")?;

    let saved = wishlist::ids(portal.store());
    let shown = GalleryFilter::new(species, search).apply(&pets);
    if shown.is_empty() {
        println!("{NO_PETS_FOUND}");
    }
    for pet in shown {
        let heart = if saved.contains(&pet.id) { " ♥" } else { "" };
        println!(
            "#{} {}{heart} ({}, {}, {}, {}) [{}]",
            pet.id,
            pet.name,
            pet.species,
            pet.breed,
            pet.age,
            pet.gender,
            pet.badges().join(", ")
        );
    }
    Ok(())
}
