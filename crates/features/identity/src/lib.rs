//! Identity feature slice: who is using the portal and which dashboard they land on.
//!
//! There is no authentication. A user types a name and picks a [`Role`]; the form is kept
//! in the store under `homepageFormData` so the next visit resumes the same session.

mod error;
mod registration;
mod session;

pub use crate::error::{IdentityError, IdentityErrorExt};
pub use crate::registration::{Registration, current, register, sign_out};
pub use crate::session::{Dashboard, Session};
pub use furever_domain::Role;
