use furever_kernel::SlotError;
use std::borrow::Cow;

/// A specialized [`CommunityError`] enum of this crate.
#[furever_derive::furever_error]
pub enum CommunityError {
    /// The submitted text or value cannot be posted.
    #[error("Invalid input{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The thread, answer, entry, or place does not exist.
    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Community storage error{}: {source}", format_context(.context))]
    Storage { source: SlotError, context: Option<Cow<'static, str>> },

    #[error("Internal community error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl CommunityError {
    pub(crate) fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Invalid { message: message.into(), context: None }
    }

    pub(crate) fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound { message: message.into(), context: None }
    }
}
