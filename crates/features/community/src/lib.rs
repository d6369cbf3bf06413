//! Community feature slice.
//!
//! Every panel here is local to the device: boards and counters live in the injected
//! [`KeyValueStore`](furever_storage::KeyValueStore) under their portal keys, and unreadable
//! data degrades to the panel's starting state.
//!
//! | Module        | Key               | Starting state      |
//! |---------------|-------------------|---------------------|
//! | [`qna`]       | `qna-threads`     | seed thread `t1`    |
//! | [`contest`]   | `contest-entries` | no entries          |
//! | [`map`]       | `map-checkins`    | zero check-ins      |
//! | [`memories`]  | `memories-items`  | empty timeline      |
//! | [`donations`] | (memory only)     | empty ledger        |

pub mod contest;
pub mod donations;
mod error;
pub mod map;
pub mod memories;
pub mod qna;

pub use crate::contest::ContestEntry;
pub use crate::donations::{Ledger, LedgerEntry};
pub use crate::error::{CommunityError, CommunityErrorExt};
pub use crate::map::{Place, PlaceFilter, PlaceKind};
pub use crate::memories::{Memory, MemoryDraft};
pub use crate::qna::{Answer, Thread, Topic};
