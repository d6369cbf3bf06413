use furever_kernel::SlotError;
use std::borrow::Cow;

/// A specialized [`AdoptionError`] enum of this crate.
#[furever_derive::furever_error]
pub enum AdoptionError {
    /// A lifestyle answer is outside what the questionnaire accepts.
    #[error("Invalid lifestyle profile{}: {message}", format_context(.context))]
    InvalidProfile { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Adoption storage error{}: {source}", format_context(.context))]
    Storage { source: SlotError, context: Option<Cow<'static, str>> },

    #[error("Internal adoption error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
