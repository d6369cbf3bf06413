use crate::args::{ContestAction, MapAction, MemoriesAction, QnaAction};
use anyhow::{Context, Result};
use furever::Portal;
use furever::features::community::contest::{self, DEFAULT_HASHTAG};
use furever::features::community::map::{self, PLACES, PlaceFilter, SUGGESTION_RECEIVED};
use furever::features::community::memories::{self, MemoryDraft, NO_MEMORIES};
use furever::features::community::qna::{self, NO_ANSWERS, Topic};
use std::str::FromStr;

/// `all` means no topic filter.
fn topic(value: &str) -> Result<Option<Topic>> {
    if value.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    Topic::from_str(value).map(Some).with_context(|| format!("Unknown topic '{value}'"))
}

pub(crate) fn qna(portal: &Portal, action: QnaAction) -> Result<()> {
    let store = portal.store();
    match action {
        QnaAction::List { topic: wanted, search } => {
            let board = qna::threads(store);
            for thread in qna::search(&board, topic(&wanted)?, &search) {
                println!(
                    "[{}] {} ({}, asked by {})",
                    thread.id, thread.title, thread.topic, thread.created_by
                );
                if thread.answers.is_empty() {
                    println!("    {NO_ANSWERS}");
                }
                for answer in &thread.answers {
                    let mark = if answer.accepted { " ✔ accepted" } else { "" };
                    println!(
                        "    [{}] {}: {} (▲{}){mark}",
                        answer.id, answer.author, answer.content, answer.upvotes
                    );
                }
            }
        },
        QnaAction::Ask { title, topic: wanted } => {
            let thread = qna::ask(store, &title, topic(&wanted)?)?;
            println!("Question posted as {} in {}.", thread.id, thread.topic);
        },
        QnaAction::Answer { thread, content, author } => {
            let answer = qna::answer(store, &thread, &author, &content)?;
            println!("Answer {} posted by {}.", answer.id, answer.author);
        },
        QnaAction::Upvote { thread, answer } => {
            let upvotes = qna::upvote(store, &thread, &answer)?;
            println!("Upvotes: {upvotes}");
        },
        QnaAction::Accept { thread, answer } => {
            qna::accept(store, &thread, &answer)?;
            println!("Answer {answer} accepted.");
        },
    }
    Ok(())
}

pub(crate) fn contest(portal: &Portal, action: ContestAction) -> Result<()> {
    let store = portal.store();
    match action {
        ContestAction::List => {
            let all = contest::entries(store);
            if all.is_empty() {
                println!("No entries yet. Share a photo tagged {DEFAULT_HASHTAG}!");
                return Ok(());
            }
            println!("Leaderboard:");
            for (rank, entry) in contest::leaderboard(&all).into_iter().enumerate() {
                println!(
                    "  {}. {} by {} ({} votes)",
                    rank + 1,
                    entry.hashtag,
                    entry.author,
                    entry.votes
                );
            }
            println!("Entries:");
            for entry in &all {
                println!(
                    "  [{}] {} {} ({} votes)",
                    entry.id, entry.hashtag, entry.image, entry.votes
                );
            }
        },
        ContestAction::Submit { image, hashtag } => {
            let entry = contest::submit(store, &hashtag, &image)?;
            println!("Entry {} submitted with {}.", entry.id, entry.hashtag);
        },
        ContestAction::Vote { id } => {
            let votes = contest::vote(store, &id)?;
            println!("Votes: {votes}");
        },
    }
    Ok(())
}

pub(crate) fn map(portal: &Portal, action: MapAction) -> Result<()> {
    let store = portal.store();
    match action {
        MapAction::List { kind, separate_area, leash, query } => {
            let filter = PlaceFilter { kind, separate_area, leash_required: leash, query };
            let counts = map::checkins(store);
            let shown = filter.apply(&PLACES);
            if shown.is_empty() {
                println!("No places match these filters.");
            }
            for place in shown {
                println!(
                    "[{}] {} ({}) {}: {}, {}, {} check-ins",
                    place.id,
                    place.name,
                    place.kind,
                    place.address,
                    place.rules.area_label(),
                    place.rules.leash_label(),
                    counts.get(place.id).copied().unwrap_or_default()
                );
            }
        },
        MapAction::Suggest { name } => {
            tracing::info!(place = %name.trim(), "Place suggested");
            println!("{SUGGESTION_RECEIVED}");
        },
        MapAction::CheckIn { place } => {
            let count = map::check_in(store, &place)?;
            println!("Checked in. {count} check-ins so far.");
        },
    }
    Ok(())
}

pub(crate) fn memories(portal: &Portal, action: MemoriesAction) -> Result<()> {
    let store = portal.store();
    match action {
        MemoriesAction::List => {
            let timeline = memories::items(store);
            if timeline.is_empty() {
                println!("{NO_MEMORIES}");
            }
            for memory in timeline {
                let date = if memory.date.is_empty() { "undated" } else { memory.date.as_str() };
                println!("{date}  {}", memory.title);
                if let Some(description) = &memory.description {
                    println!("    {description}");
                }
                if let Some(media) = &memory.media {
                    println!("    media: {media}");
                }
            }
        },
        MemoriesAction::Add { title, date, description, media } => {
            let memory = memories::add(store, MemoryDraft { date, title, description, media })?;
            println!("Memory {} saved.", memory.id);
        },
    }
    Ok(())
}
