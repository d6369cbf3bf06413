//! Names of the gated portal features, matched verbatim by the access model.

pub const VETERINARY_CARE: &str = "Veterinary Care";
pub const EMERGENCY_SERVICES: &str = "Emergency Services";
pub const PET_TRAINING: &str = "Pet Training";
pub const GROOMING: &str = "Grooming";
pub const PET_ADOPTION: &str = "Pet Adoption";
pub const PET_PRODUCTS: &str = "Pet Products";

/// Services listed in the footer, in display order.
pub const SERVICES: [&str; 6] =
    [PET_ADOPTION, VETERINARY_CARE, PET_PRODUCTS, EMERGENCY_SERVICES, PET_TRAINING, GROOMING];
