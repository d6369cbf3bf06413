use furever_kernel::SlotError;
use std::borrow::Cow;

/// A specialized [`CareError`] enum of this crate.
#[furever_derive::furever_error]
pub enum CareError {
    /// A form is missing a required field.
    #[error("Form incomplete{}: {message}", format_context(.context))]
    Incomplete { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid entry{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Care storage error{}: {source}", format_context(.context))]
    Storage { source: SlotError, context: Option<Cow<'static, str>> },

    #[error("Internal care error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl CareError {
    pub(crate) fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Invalid { message: message.into(), context: None }
    }
}

/// Names the first blank field of a form.
pub(crate) fn require_filled(fields: &[(&'static str, &str)]) -> Result<(), CareError> {
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((name, _)) => Err(CareError::Incomplete {
            message: format!("{name} is required").into(),
            context: None,
        }),
        None => Ok(()),
    }
}
