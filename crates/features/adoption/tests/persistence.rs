use chrono::Utc;
use furever_adoption::interests::{self, MAX_INTERESTS};
use furever_adoption::{AdoptionError, CANDIDATES, WishlistChange, load_pets, wishlist};
use furever_storage::FileStore;
use tempfile::TempDir;

#[test]
fn interests_survive_reopen() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    {
        let store = FileStore::builder().root(dir.path()).open()?;
        interests::confirm(&store, &CANDIDATES[0], Utc::now())?;
        interests::confirm(&store, &CANDIDATES[2], Utc::now())?;
    }

    let store = FileStore::builder().root(dir.path()).open()?;
    let log = interests::list(&store);
    assert_eq!(log.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), ["a3", "a1"]);
    assert!(log.len() <= MAX_INTERESTS);
    Ok(())
}

#[test]
fn wishlist_toggle_twice_restores_state() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let store = FileStore::builder().root(dir.path()).open()?;
    wishlist::toggle(&store, 3)?;
    let before = wishlist::ids(&store);

    assert_eq!(wishlist::toggle(&store, 9)?, WishlistChange::Added);
    assert_eq!(wishlist::toggle(&store, 9)?, WishlistChange::Removed);
    assert_eq!(wishlist::ids(&store), before);
    Ok(())
}

#[tokio::test]
async fn gallery_fixture_loads_pets() -> Result<(), std::io::Error> {
    let dir = TempDir::new()?;
    let path = dir.path().join("adoptable-pets.json");
    std::fs::write(
        &path,
        r#"{"pets":[{"id":1,"name":"Max","type":"dog","breed":"Beagle","age":"3 years",
            "gender":"Male","description":"Friendly","image":"","status":"available"}]}"#,
    )?;

    let pets = load_pets(&path).await;
    assert_eq!(pets.ready().map(Vec::len), Some(1));

    let missing = load_pets(dir.path().join("nope.json")).await;
    assert!(!missing.is_ready());
    Ok(())
}

#[test]
fn error_is_displayable() {
    let err = AdoptionError::from("boom");
    assert!(err.to_string().contains("boom"));
}
