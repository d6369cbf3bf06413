//! # CLI Argument Definitions
//!
//! Subcommands mirror the portal's panels. Every command works against the data directory
//! from `furever.toml` unless `--data-dir` overrides it.

use clap::{Parser, Subcommand, ValueEnum};
use furever::domain::{Energy, Role, Space};
use furever::features::care::Symptom;
use furever::features::community::PlaceKind;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "furever")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "FurEver Care: adoption, care, and community tools for pet lovers")]
pub(crate) struct Cli {
    /// Configuration file (defaults to ./furever.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding saved portal data
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Enter your name and pick who you are
    Register {
        name: String,
        /// pet-owner, veterinarian, or shelter
        #[arg(short, long)]
        role: Role,
    },
    /// Show the current session
    Whoami,
    /// Forget the saved session
    SignOut,
    /// Check whether the current role may open a service
    Access {
        /// Service name, exactly as listed (e.g. "Pet Adoption")
        feature: String,
        /// Follow a link to this destination after the check ("#" is a placeholder)
        #[arg(long)]
        href: Option<String>,
    },
    /// List services and whether they are available to you
    Services,
    /// Find adoption candidates that fit your lifestyle
    Match {
        /// Hours away from home per day (0-16)
        #[arg(long, default_value_t = 8)]
        hours: u8,
        /// There are children at home
        #[arg(long)]
        kids: bool,
        #[arg(long, default_value_t = Space::Medium)]
        space: Space,
        /// Preferred energy; medium means no preference
        #[arg(long, default_value_t = Energy::Medium)]
        energy: Energy,
        /// Also list excluded candidates and why
        #[arg(long)]
        explain: bool,
    },
    /// Tell the shelter you are interested in a candidate
    Interest {
        /// Candidate id (e.g. a2)
        pet: String,
    },
    /// Show your saved adoption interests
    Interests,
    /// Manage gallery pets saved to your wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Browse the shelter gallery
    Pets {
        /// all, dog, cat, or rabbit
        #[arg(long, default_value = "all")]
        species: String,
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Browse pet products
    Products {
        #[arg(long, default_value = "all")]
        category: String,
        #[arg(long, default_value = "")]
        search: String,
        /// Show one product in detail
        #[arg(long)]
        id: Option<u32>,
        /// List categories instead of products
        #[arg(long)]
        categories: bool,
    },
    /// Expert Q&A board
    Qna {
        #[command(subcommand)]
        action: QnaAction,
    },
    /// Monthly photo contest
    Contest {
        #[command(subcommand)]
        action: ContestAction,
    },
    /// Pet-friendly places nearby
    Map {
        #[command(subcommand)]
        action: MapAction,
    },
    /// Your pet's milestones
    Memories {
        #[command(subcommand)]
        action: MemoriesAction,
    },
    /// Quick symptom check (not a diagnosis)
    Triage {
        /// lethargy or vomiting
        symptom: Symptom,
        answer: YesNo,
    },
}

#[derive(Debug, Subcommand)]
pub(crate) enum WishlistAction {
    List,
    /// Add a pet, or remove it if already saved
    Toggle { id: u32 },
}

#[derive(Debug, Subcommand)]
pub(crate) enum QnaAction {
    List {
        /// all, health, training, nutrition, or general
        #[arg(long, default_value = "all")]
        topic: String,
        #[arg(long, default_value = "")]
        search: String,
    },
    Ask {
        title: String,
        #[arg(long, default_value = "all")]
        topic: String,
    },
    Answer {
        thread: String,
        content: String,
        #[arg(long, default_value = "You")]
        author: String,
    },
    Upvote { thread: String, answer: String },
    Accept { thread: String, answer: String },
}

#[derive(Debug, Subcommand)]
pub(crate) enum ContestAction {
    List,
    Submit {
        /// Path or URL of the photo
        image: String,
        #[arg(long, default_value = "")]
        hashtag: String,
    },
    Vote { id: String },
}

#[derive(Debug, Subcommand)]
pub(crate) enum MapAction {
    List {
        #[arg(long)]
        kind: Option<PlaceKind>,
        #[arg(long)]
        separate_area: Option<bool>,
        #[arg(long)]
        leash: Option<bool>,
        #[arg(long, default_value = "")]
        query: String,
    },
    CheckIn { place: String },
    /// Suggest a pet-friendly place we are missing
    Suggest { name: String },
}

#[derive(Debug, Subcommand)]
pub(crate) enum MemoriesAction {
    List,
    Add {
        title: String,
        /// YYYY-MM-DD
        #[arg(long, default_value = "")]
        date: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        media: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum YesNo {
    Yes,
    No,
}
