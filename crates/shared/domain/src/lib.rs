//! # Domain Models
//!
//! Pure FurEver types with minimal dependencies (`serde`, `bitflags`, `strum`).
//! Keep it lean: no I/O or storage access, just data and the string forms the portal uses.

pub mod config;
pub mod features;
pub mod keys;
pub mod lifestyle;
pub mod role;
pub mod roles;

pub use lifestyle::{Energy, Space};
pub use role::Role;
pub use roles::RoleSet;
