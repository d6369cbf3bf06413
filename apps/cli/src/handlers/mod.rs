//! One module per feature slice. Handlers print results on stdout and return errors for
//! anything the user has to fix.

pub(crate) mod access;
pub(crate) mod adoption;
pub(crate) mod care;
pub(crate) mod catalog;
pub(crate) mod community;
pub(crate) mod identity;

use anyhow::{Result, bail};
use furever::kernel::Loadable;

/// Unwraps a fixture load, turning a failure into an error the user sees.
pub(crate) fn ready<T>(loaded: Loadable<T>, what: &str) -> Result<T> {
    match loaded {
        Loadable::Ready(value) => Ok(value),
        Loadable::Failed(reason) => bail!("Could not load {what}: {reason}"),
        Loadable::Loading => bail!("{what} are still loading"),
    }
}
