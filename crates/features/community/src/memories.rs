//! Pet milestones timeline kept under `memories-items`.

use crate::error::{CommunityError, CommunityErrorExt};
use chrono::NaiveDate;
use furever_domain::keys::MEMORIES_ITEMS;
use furever_kernel::{safe_nanoid, slot};
use furever_storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use tracing::info;

pub const NO_MEMORIES: &str = "No memories yet. Add your first milestone.";

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    pub id: String,
    /// `YYYY-MM-DD`, or empty when the owner skipped it.
    pub date: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}

/// Input for [`add`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDraft {
    pub date: String,
    pub title: String,
    pub description: Option<String>,
    pub media: Option<String>,
}

#[must_use]
pub fn items(store: &dyn KeyValueStore) -> Vec<Memory> {
    slot::load_list_or_default(store, MEMORIES_ITEMS)
}

/// Puts a milestone at the top of the timeline.
///
/// # Errors
/// Returns [`CommunityError::Invalid`] for a blank title or a date that is not `YYYY-MM-DD`,
/// or [`CommunityError::Storage`].
pub fn add(store: &dyn KeyValueStore, draft: MemoryDraft) -> Result<Memory, CommunityError> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err(CommunityError::invalid("a memory needs a title"));
    }
    let date = draft.date.trim();
    if !date.is_empty() && NaiveDate::parse_from_str(date, DATE_FORMAT).is_err() {
        return Err(CommunityError::invalid(format!("'{date}' is not a YYYY-MM-DD date")));
    }

    let memory = Memory {
        id: safe_nanoid!(),
        date: date.to_owned(),
        title: title.to_owned(),
        description: non_blank(draft.description),
        media: non_blank(draft.media),
    };

    let mut timeline = items(store);
    timeline.insert(0, memory.clone());
    slot::save(store, MEMORIES_ITEMS, &timeline).context("Saving memory")?;

    info!(memory = %memory.id, with_media = memory.media.is_some(), "Memory added");
    Ok(memory)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use furever_storage::MemoryStore;

    #[test]
    fn add_prepends_and_drops_blank_optionals() -> Result<(), CommunityError> {
        let store = MemoryStore::new();
        add(&store, MemoryDraft { title: "Adoption day".into(), date: "2024-05-01".into(), ..Default::default() })?;
        let second = add(
            &store,
            MemoryDraft {
                title: "First swim".into(),
                date: String::new(),
                description: Some("  ".into()),
                media: Some("/uploads/swim.mp4".into()),
            },
        )?;

        assert_eq!(second.description, None);
        let timeline = items(&store);
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0], second);
        assert_eq!(timeline[1].title, "Adoption day");
        Ok(())
    }

    #[test]
    fn rejects_blank_title_and_bad_date() {
        let store = MemoryStore::new();
        assert!(add(&store, MemoryDraft::default()).is_err());
        let bad = MemoryDraft { title: "Birthday".into(), date: "May 1st".into(), ..Default::default() };
        assert!(matches!(add(&store, bad), Err(CommunityError::Invalid { .. })));
        assert!(items(&store).is_empty());
    }

    #[test]
    fn optional_fields_are_omitted_on_disk() -> Result<(), serde_json::Error> {
        let memory = Memory {
            id: "m1".into(),
            date: String::new(),
            title: "Hello".into(),
            description: None,
            media: None,
        };
        assert_eq!(serde_json::to_string(&memory)?, r#"{"id":"m1","date":"","title":"Hello"}"#);
        Ok(())
    }
}
