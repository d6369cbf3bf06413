//! Storage keys used by the portal panels.

pub const HOMEPAGE_FORM: &str = "homepageFormData";
pub const PET_OWNER_FORM: &str = "petOwnerFormData";
pub const VETERINARIAN_FORM: &str = "veterinarianFormData";
pub const PET_WISHLIST: &str = "petWishlist";
pub const CONTEST_ENTRIES: &str = "contest-entries";
pub const QNA_THREADS: &str = "qna-threads";
pub const MEMORIES_ITEMS: &str = "memories-items";
pub const MAP_CHECKINS: &str = "map-checkins";
pub const ADOPTION_INTERESTS: &str = "adoption-interests";

pub const PET_PUBLIC_PREFIX: &str = "pet-public-";

/// Key of the public profile published under `handle`.
#[must_use]
pub fn pet_public(handle: &str) -> String {
    format!("{PET_PUBLIC_PREFIX}{handle}")
}
