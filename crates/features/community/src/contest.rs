//! Monthly photo contest kept under `contest-entries`.

use crate::error::{CommunityError, CommunityErrorExt};
use furever_domain::keys::CONTEST_ENTRIES;
use furever_kernel::{safe_nanoid, slot};
use furever_storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use tracing::info;

pub const DEFAULT_HASHTAG: &str = "#HappyPaws";

/// Entries shown on the "most voted" strip.
pub const LEADERBOARD_SIZE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestEntry {
    pub id: String,
    pub author: String,
    pub hashtag: String,
    /// Image reference (path, URL, or data URL).
    pub image: String,
    pub votes: u32,
}

#[must_use]
pub fn entries(store: &dyn KeyValueStore) -> Vec<ContestEntry> {
    slot::load_list_or_default(store, CONTEST_ENTRIES)
}

/// Submits a photo; a blank hashtag becomes [`DEFAULT_HASHTAG`].
///
/// # Errors
/// Returns [`CommunityError::Invalid`] without an image, or [`CommunityError::Storage`].
pub fn submit(
    store: &dyn KeyValueStore,
    hashtag: &str,
    image: &str,
) -> Result<ContestEntry, CommunityError> {
    let image = image.trim();
    if image.is_empty() {
        return Err(CommunityError::invalid("an entry needs a photo"));
    }
    let hashtag = match hashtag.trim() {
        "" => DEFAULT_HASHTAG,
        tag => tag,
    };

    let entry = ContestEntry {
        id: safe_nanoid!(),
        author: "You".to_owned(),
        hashtag: hashtag.to_owned(),
        image: image.to_owned(),
        votes: 0,
    };

    let mut all = entries(store);
    all.insert(0, entry.clone());
    slot::save(store, CONTEST_ENTRIES, &all).context("Saving contest entry")?;

    info!(entry = %entry.id, hashtag = %entry.hashtag, "Contest entry submitted");
    Ok(entry)
}

/// Adds one vote and returns the new count.
///
/// # Errors
/// Returns [`CommunityError::NotFound`] for an unknown entry, or [`CommunityError::Storage`].
pub fn vote(store: &dyn KeyValueStore, entry_id: &str) -> Result<u32, CommunityError> {
    let mut all = entries(store);
    let entry = all
        .iter_mut()
        .find(|entry| entry.id == entry_id)
        .ok_or_else(|| CommunityError::not_found(format!("contest entry '{entry_id}'")))?;

    entry.votes = entry.votes.saturating_add(1);
    let votes = entry.votes;
    slot::save(store, CONTEST_ENTRIES, &all).context("Saving contest vote")?;
    Ok(votes)
}

/// Top entries by votes; ties keep submission-list order.
#[must_use]
pub fn leaderboard(entries: &[ContestEntry]) -> Vec<&ContestEntry> {
    let mut ranked: Vec<&ContestEntry> = entries.iter().collect();
    ranked.sort_by(|a, b| b.votes.cmp(&a.votes));
    ranked.truncate(LEADERBOARD_SIZE);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use furever_storage::MemoryStore;

    #[test]
    fn submit_defaults_hashtag_and_prepends() -> Result<(), CommunityError> {
        let store = MemoryStore::new();
        let first = submit(&store, "", "/uploads/milo.jpg")?;
        let second = submit(&store, "#SleepyCats", "/uploads/luna.jpg")?;

        assert_eq!(first.hashtag, DEFAULT_HASHTAG);
        assert_eq!(first.votes, 0);
        let ids: Vec<String> = entries(&store).into_iter().map(|e| e.id).collect();
        assert_eq!(ids, [second.id, first.id]);
        Ok(())
    }

    #[test]
    fn submit_without_photo_is_rejected() {
        let store = MemoryStore::new();
        assert!(matches!(submit(&store, "#Paws", " "), Err(CommunityError::Invalid { .. })));
    }

    #[test]
    fn vote_counts_up() -> Result<(), CommunityError> {
        let store = MemoryStore::new();
        let entry = submit(&store, "", "/a.jpg")?;
        vote(&store, &entry.id)?;
        assert_eq!(vote(&store, &entry.id)?, 2);
        assert!(matches!(vote(&store, "missing"), Err(CommunityError::NotFound { .. })));
        Ok(())
    }

    #[test]
    fn leaderboard_is_stable_top_three() {
        let entry = |id: &str, votes| ContestEntry {
            id: id.to_owned(),
            author: "You".to_owned(),
            hashtag: DEFAULT_HASHTAG.to_owned(),
            image: String::new(),
            votes,
        };
        let all = [entry("e1", 2), entry("e2", 5), entry("e3", 2), entry("e4", 0), entry("e5", 2)];
        let top: Vec<&str> = leaderboard(&all).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(top, ["e2", "e1", "e3"]);
        assert!(leaderboard(&[]).is_empty());
    }
}
