use crate::error::{AdoptionError, AdoptionErrorExt};
use crate::matching::AdoptionCandidate;
use chrono::{DateTime, Utc};
use furever_domain::keys::ADOPTION_INTERESTS;
use furever_kernel::slot;
use furever_storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Most records kept in the interest log.
pub const MAX_INTERESTS: usize = 50;

pub const NO_INTERESTS: &str = "No interests yet.";

/// One "I'm interested" click, as stored under `adoption-interests`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestRecord {
    /// Candidate id.
    pub id: String,
    pub name: String,
    pub when: DateTime<Utc>,
}

impl InterestRecord {
    /// Confirmation shown after the record is saved.
    #[must_use]
    pub fn acknowledgment(&self) -> String {
        format!("We've saved your interest in {}. We'll contact you soon!", self.name)
    }
}

/// Records interest in `pet` at the front of the log.
///
/// # Errors
/// Returns [`AdoptionError::Storage`] if the log could not be written.
pub fn confirm(
    store: &dyn KeyValueStore,
    pet: &AdoptionCandidate,
    now: DateTime<Utc>,
) -> Result<InterestRecord, AdoptionError> {
    let record = InterestRecord { id: pet.id.to_string(), name: pet.name.to_string(), when: now };

    let mut log = list(store);
    slot::prepend_capped(&mut log, record.clone(), MAX_INTERESTS);
    slot::save(store, ADOPTION_INTERESTS, &log).context("Saving adoption interest")?;

    info!(pet = %pet.id, total = log.len(), "Adoption interest recorded");
    Ok(record)
}

/// The log, most recent first. Missing or unreadable data reads as empty; a single
/// malformed record is skipped rather than hiding the rest.
#[must_use]
pub fn list(store: &dyn KeyValueStore) -> Vec<InterestRecord> {
    slot::load_list_or_default(store, ADOPTION_INTERESTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::CANDIDATES;
    use chrono::TimeZone;
    use furever_storage::{MemoryStore, StorageError};

    #[test]
    fn confirm_prepends_one_record() -> Result<(), AdoptionError> {
        let store = MemoryStore::new();
        let first = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).single().ok_or("bad date")?;
        let second = Utc.with_ymd_and_hms(2025, 3, 2, 9, 0, 0).single().ok_or("bad date")?;

        confirm(&store, &CANDIDATES[1], first)?;
        let record = confirm(&store, &CANDIDATES[2], second)?;

        assert_eq!(record.acknowledgment(), "We've saved your interest in Whiskers. We'll contact you soon!");
        let log = list(&store);
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], record);
        assert_eq!(log[1].name, "Bella");
        Ok(())
    }

    #[test]
    fn log_is_capped() -> Result<(), AdoptionError> {
        let store = MemoryStore::new();
        let now = Utc::now();
        for _ in 0..MAX_INTERESTS + 5 {
            confirm(&store, &CANDIDATES[0], now)?;
        }
        assert_eq!(list(&store).len(), MAX_INTERESTS);
        Ok(())
    }

    #[test]
    fn corrupt_log_reads_as_empty() -> Result<(), StorageError> {
        let store = MemoryStore::new();
        store.set(ADOPTION_INTERESTS, "[{\"id\":1}")?;
        assert!(list(&store).is_empty());
        Ok(())
    }

    #[test]
    fn confirm_keeps_valid_records_around_a_tampered_one() -> Result<(), AdoptionError> {
        let store = MemoryStore::new();
        let now = Utc::now();
        for pet in CANDIDATES.iter().cycle().take(10) {
            confirm(&store, pet, now)?;
        }

        let raw =
            store.get(ADOPTION_INTERESTS).map_err(|e| e.to_string())?.ok_or("log missing")?;
        let mut entries: Vec<serde_json::Value> =
            serde_json::from_str(&raw).map_err(|e| e.to_string())?;
        entries.insert(4, serde_json::json!({ "id": "a9", "name": "Ghost" }));
        let tampered = serde_json::to_string(&entries).map_err(|e| e.to_string())?;
        store.set(ADOPTION_INTERESTS, &tampered).map_err(|e| e.to_string())?;
        assert_eq!(list(&store).len(), 10);

        confirm(&store, &CANDIDATES[1], now)?;
        let log = list(&store);
        assert_eq!(log.len(), 11);
        assert_eq!(log[0].name, "Bella");
        assert!(log.iter().all(|record| record.name != "Ghost"));
        Ok(())
    }

    #[test]
    fn reads_browser_timestamps() -> Result<(), StorageError> {
        let store = MemoryStore::new();
        store.set(
            ADOPTION_INTERESTS,
            r#"[{"id":"a1","name":"Buddy","when":"2025-01-05T10:20:30.123Z"}]"#,
        )?;
        let log = list(&store);
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].when.timestamp(), 1_736_072_430);
        Ok(())
    }
}
