use furever_care::{PetRegistration, public_card, slugify};
use furever_storage::{FileStore, KeyValueStore};
use proptest::prelude::*;
use tempfile::TempDir;

#[test]
fn registered_pet_is_published_and_found_after_reopen() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    {
        let store = FileStore::builder().root(dir.path()).open()?;
        let mut form = PetRegistration {
            pet_name: "Lucky Star".into(),
            pet_species: "Cat".into(),
            pet_breed: "British Shorthair".into(),
            pet_age: "4".into(),
            ..Default::default()
        };
        form.register()?;
        form.save(&store)?;
        form.publish(&store, "Minh")?;
    }

    let store = FileStore::builder().root(dir.path()).open()?;
    assert!(PetRegistration::load(&store).is_pet_registered);
    assert!(store.contains("pet-public-lucky-star")?);
    assert_eq!(public_card(&store, "lucky-star").title, "Lucky Star · Public Profile");
    Ok(())
}

#[test]
fn corrupt_profile_shows_placeholders() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let store = FileStore::builder().root(dir.path()).open()?;
    store.set("pet-public-lucky", "{\"name\": 42}")?;
    assert_eq!(public_card(&store, "lucky").title, "Pet · Public Profile");
    Ok(())
}

proptest! {
    #[test]
    fn slugs_are_storage_safe(name in "\\PC{0,200}") {
        let slug = slugify(&name);
        prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        prop_assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
        prop_assert!(slug.len() <= 64);
    }
}
