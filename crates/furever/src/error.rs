use furever_access::AccessDenied;
use furever_storage::StorageError;
use std::borrow::Cow;

/// A specialized [`PortalError`] enum of this crate.
#[furever_derive::furever_error]
pub enum PortalError {
    #[error("Storage unavailable{}: {source}", format_context(.context))]
    Storage { source: StorageError, context: Option<Cow<'static, str>> },

    #[error("Access denied{}: {source}", format_context(.context))]
    Denied { source: AccessDenied, context: Option<Cow<'static, str>> },

    #[error("Internal portal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
