//! Adoption feature slice.
//!
//! - [`matching`]: the lifestyle questionnaire and the filter over adoption candidates.
//! - [`interests`]: the "I'm interested" log kept under `adoption-interests`.
//! - [`wishlist`]: gallery pets saved under `petWishlist`.
//! - [`gallery`]: the shelter's adoptable-pets fixture with species and text filters.
//! - [`process`]: the post-match checklist and follow-up visits.
//!
//! Filtering never touches the store; only confirming interest and toggling the wishlist write.

mod error;
pub mod gallery;
pub mod interests;
pub mod matching;
pub mod process;
pub mod wishlist;

pub use crate::error::{AdoptionError, AdoptionErrorExt};
pub use crate::gallery::{AdoptablePet, GalleryFilter, load_pets};
pub use crate::interests::{InterestRecord, confirm, list};
pub use crate::matching::{AdoptionCandidate, CANDIDATES, Exclusion, LifestyleProfile, MatchView};
pub use crate::process::AdoptionProcess;
pub use crate::wishlist::WishlistChange;
pub use furever_domain::{Energy, Space};
