use furever_kernel::SlotError;
use std::borrow::Cow;

/// A specialized [`IdentityError`] enum of this crate.
#[furever_derive::furever_error]
pub enum IdentityError {
    /// The registration form is incomplete.
    #[error("Registration incomplete{}: {message}", format_context(.context))]
    Incomplete { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Identity storage error{}: {source}", format_context(.context))]
    Storage { source: SlotError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal identity error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
