use furever_community::qna::{self, Topic};
use furever_community::{contest, map, memories};
use furever_storage::{FileStore, KeyValueStore, MemoryStore};
use proptest::prelude::*;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn panels_persist_across_reopen() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let thread_id = {
        let store = FileStore::builder().root(dir.path()).open()?;
        let thread = qna::ask(&store, "Is chocolate toxic for dogs?", Some(Topic::Nutrition))?;
        qna::answer(&store, &thread.id, "Dr. Lan", "Yes. Call a clinic right away.")?;
        contest::submit(&store, "", "/uploads/momo.jpg")?;
        map::check_in(&store, "p2")?;
        memories::add(
            &store,
            memories::MemoryDraft { title: "Gotcha day".into(), ..Default::default() },
        )?;
        thread.id
    };

    let store = FileStore::builder().root(dir.path()).open()?;
    let board = qna::threads(&store);
    assert_eq!(board.len(), 2);
    assert_eq!(board[0].id, thread_id);
    assert_eq!(board[0].answers.len(), 1);
    assert_eq!(contest::entries(&store).len(), 1);
    assert_eq!(map::checkins(&store).get("p2"), Some(&1));
    assert_eq!(memories::items(&store)[0].title, "Gotcha day");
    Ok(())
}

#[test]
fn works_through_a_shared_handle() -> Result<(), Box<dyn std::error::Error>> {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let entry = contest::submit(store.as_ref(), "#Zoomies", "/z.jpg")?;
    contest::vote(store.as_ref(), &entry.id)?;
    assert_eq!(contest::leaderboard(&contest::entries(store.as_ref()))[0].votes, 1);
    Ok(())
}

#[test]
fn writes_keep_valid_entries_next_to_a_tampered_one() -> Result<(), Box<dyn std::error::Error>> {
    let store = MemoryStore::new();
    store.set(
        "contest-entries",
        r##"[{"id":"e1","author":"Mai","hashtag":"#HappyPaws","image":"/a.jpg","votes":4},
            {"id":"e2","votes":"many"}]"##,
    )?;
    store.set(
        "memories-items",
        r#"[{"id":"m1","date":"2024-05-01","title":"First bath"},{"title":7}]"#,
    )?;
    store.set("map-checkins", r#"{"p1":5,"p2":"x"}"#)?;

    contest::submit(&store, "", "/b.jpg")?;
    assert_eq!(contest::vote(&store, "e1")?, 5);
    memories::add(&store, memories::MemoryDraft { title: "Vet visit".into(), ..Default::default() })?;
    assert_eq!(map::check_in(&store, "p3")?, 1);

    let entries = contest::entries(&store);
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().any(|entry| entry.id == "e1"));
    let timeline = memories::items(&store);
    assert_eq!(timeline.iter().map(|m| m.title.as_str()).collect::<Vec<_>>(), ["Vet visit", "First bath"]);
    assert_eq!(map::checkins(&store).get("p1"), Some(&5));
    Ok(())
}

#[test]
fn answering_keeps_threads_next_to_a_tampered_one() -> Result<(), Box<dyn std::error::Error>> {
    let store = MemoryStore::new();
    let mut board = serde_json::to_value(qna::seed_threads())?;
    if let Some(threads) = board.as_array_mut() {
        threads.push(serde_json::json!({ "id": "t9", "topic": "astrology" }));
    }
    store.set("qna-threads", &board.to_string())?;

    qna::answer(&store, "t1", "", "Try rice and boiled chicken.")?;
    let threads = qna::threads(&store);
    assert_eq!(threads.len(), 1);
    assert_eq!(threads[0].answers.len(), 3);
    assert_eq!(threads[0].answers[2].author, "You");
    Ok(())
}

proptest! {
    #[test]
    fn accept_leaves_exactly_one_accepted(picks in prop::collection::vec(0usize..3, 1..8)) {
        let store = MemoryStore::new();
        let extra = qna::answer(&store, "t1", "Groomer Ben", "Probiotics can help.")
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        let ids = ["a1".to_owned(), "a2".to_owned(), extra.id];

        for pick in picks {
            qna::accept(&store, "t1", &ids[pick])
                .map_err(|err| TestCaseError::fail(err.to_string()))?;
            let board = qna::threads(&store);
            let accepted = board[0].answers.iter().filter(|a| a.accepted).count();
            prop_assert_eq!(accepted, 1);
            prop_assert_eq!(board[0].accepted().map(|a| a.id.as_str()), Some(ids[pick].as_str()));
        }
    }
}
