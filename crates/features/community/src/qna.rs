//! Expert Q&A board kept under `qna-threads`.
//!
//! A missing or unreadable board falls back to the seed thread, so the page is never empty on
//! a first visit.

use crate::error::{CommunityError, CommunityErrorExt};
use furever_domain::keys::QNA_THREADS;
use furever_kernel::{safe_nanoid, slot};
use furever_storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::info;

pub const NO_ANSWERS: &str = "No answers yet. Experts reply within 24–48 hours.";

/// Author recorded for questions asked from this device.
const LOCAL_AUTHOR: &str = "You";

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Topic {
    Health,
    Training,
    Nutrition,
    #[default]
    General,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: String,
    pub author: String,
    pub content: String,
    pub upvotes: u32,
    #[serde(default)]
    pub accepted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    pub id: String,
    pub title: String,
    pub topic: Topic,
    pub created_by: String,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl Thread {
    #[must_use]
    pub fn accepted(&self) -> Option<&Answer> {
        self.answers.iter().find(|answer| answer.accepted)
    }
}

/// The board shown on a first visit.
#[must_use]
pub fn seed_threads() -> Vec<Thread> {
    vec![Thread {
        id: "t1".to_owned(),
        title: "Puppy diarrhea for 2 days, what to do?".to_owned(),
        topic: Topic::Health,
        created_by: "Alice".to_owned(),
        answers: vec![
            Answer {
                id: "a1".to_owned(),
                author: "Dr. John".to_owned(),
                content: "Ensure hydration, bland diet. If persists >24h or lethargy, visit a clinic."
                    .to_owned(),
                upvotes: 12,
                accepted: true,
            },
            Answer {
                id: "a2".to_owned(),
                author: "Trainer Mia".to_owned(),
                content: "Check for sudden diet changes.".to_owned(),
                upvotes: 5,
                accepted: false,
            },
        ],
    }]
}

#[must_use]
pub fn threads(store: &dyn KeyValueStore) -> Vec<Thread> {
    slot::load_list(store, QNA_THREADS).unwrap_or_else(seed_threads)
}

/// Threads in `topic` (any topic when `None`) whose title contains `query`, ignoring case.
#[must_use]
pub fn search<'a>(threads: &'a [Thread], topic: Option<Topic>, query: &str) -> Vec<&'a Thread> {
    let needle = query.to_lowercase();
    threads
        .iter()
        .filter(|thread| topic.is_none_or(|topic| thread.topic == topic))
        .filter(|thread| needle.is_empty() || thread.title.to_lowercase().contains(&needle))
        .collect()
}

/// Posts a new question at the top of the board. Without a topic it is filed under `general`.
///
/// # Errors
/// Returns [`CommunityError::Invalid`] for a blank title, or [`CommunityError::Storage`].
pub fn ask(
    store: &dyn KeyValueStore,
    title: &str,
    topic: Option<Topic>,
) -> Result<Thread, CommunityError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(CommunityError::invalid("question cannot be blank"));
    }

    let thread = Thread {
        id: safe_nanoid!(),
        title: title.to_owned(),
        topic: topic.unwrap_or_default(),
        created_by: LOCAL_AUTHOR.to_owned(),
        answers: Vec::new(),
    };

    let mut board = threads(store);
    board.insert(0, thread.clone());
    save(store, &board)?;

    info!(thread = %thread.id, topic = %thread.topic, "Question posted");
    Ok(thread)
}

/// Appends an answer to a thread.
///
/// # Errors
/// Returns [`CommunityError::Invalid`] for blank content, [`CommunityError::NotFound`] for an
/// unknown thread, or [`CommunityError::Storage`].
pub fn answer(
    store: &dyn KeyValueStore,
    thread_id: &str,
    author: &str,
    content: &str,
) -> Result<Answer, CommunityError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(CommunityError::invalid("answer cannot be blank"));
    }
    let author = match author.trim() {
        "" => LOCAL_AUTHOR,
        author => author,
    };

    let mut board = threads(store);
    let thread = find_thread(&mut board, thread_id)?;
    let answer = Answer {
        id: safe_nanoid!(),
        author: author.to_owned(),
        content: content.to_owned(),
        upvotes: 0,
        accepted: false,
    };
    thread.answers.push(answer.clone());
    save(store, &board)?;

    info!(thread = thread_id, answer = %answer.id, "Answer posted");
    Ok(answer)
}

/// Adds one upvote and returns the new count.
///
/// # Errors
/// Returns [`CommunityError::NotFound`] for an unknown thread or answer, or
/// [`CommunityError::Storage`].
pub fn upvote(
    store: &dyn KeyValueStore,
    thread_id: &str,
    answer_id: &str,
) -> Result<u32, CommunityError> {
    let mut board = threads(store);
    let thread = find_thread(&mut board, thread_id)?;
    let answer = thread
        .answers
        .iter_mut()
        .find(|answer| answer.id == answer_id)
        .ok_or_else(|| CommunityError::not_found(format!("answer '{answer_id}'")))?;

    answer.upvotes = answer.upvotes.saturating_add(1);
    let upvotes = answer.upvotes;
    save(store, &board)?;
    Ok(upvotes)
}

/// Marks `answer_id` as the thread's accepted answer and clears every other mark.
///
/// # Errors
/// Returns [`CommunityError::NotFound`] for an unknown thread or answer (nothing changes), or
/// [`CommunityError::Storage`].
pub fn accept(
    store: &dyn KeyValueStore,
    thread_id: &str,
    answer_id: &str,
) -> Result<(), CommunityError> {
    let mut board = threads(store);
    let thread = find_thread(&mut board, thread_id)?;
    if !thread.answers.iter().any(|answer| answer.id == answer_id) {
        return Err(CommunityError::not_found(format!("answer '{answer_id}'")));
    }

    for answer in &mut thread.answers {
        answer.accepted = answer.id == answer_id;
    }
    save(store, &board)?;

    info!(thread = thread_id, answer = answer_id, "Answer accepted");
    Ok(())
}

fn find_thread<'a>(board: &'a mut [Thread], id: &str) -> Result<&'a mut Thread, CommunityError> {
    board
        .iter_mut()
        .find(|thread| thread.id == id)
        .ok_or_else(|| CommunityError::not_found(format!("thread '{id}'")))
}

fn save(store: &dyn KeyValueStore, board: &[Thread]) -> Result<(), CommunityError> {
    slot::save(store, QNA_THREADS, board).context("Saving Q&A board")
}
