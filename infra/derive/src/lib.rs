#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every FurEver crate.
//!
//! * [`furever_error`] turns a plain enum into the workspace's error shape.
//! * [`main`] bootstraps a `furever_runtime` profile around an `async fn main`.
//!
//! Examples are `ignore`d here because a proc-macro crate cannot use its own macros in
//! doctests; the `tests/ui` cases compile them for real.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, parse_macro_input};

/// Attribute macro to bootstrap a `furever_runtime` Tokio runtime.
///
/// Turns an `async fn main` returning a `Result` into a synchronous `fn main` that builds the
/// runtime for the requested profile and blocks on the body.
///
/// # Arguments
///
/// * `interactive` - Single worker, small stacks. The default for command-line front ends.
/// * `background` - Multi-threaded runtime sized from available parallelism.
/// * `default` - Same as omitting the argument.
///
/// # Examples
///
/// ```rust,ignore
/// #[furever_runtime::main(interactive)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro for defining domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source` field,
///   enabling the use of the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` implementations
///   if an `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must include a `source: T` field or a field marked
///    with `#[source]`/`#[from]` (compatible with `thiserror`), and a `context` field.
/// 4. Tuple or unit variants are rejected to keep error wiring explicit.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[furever_derive::furever_error]
/// pub enum StorageError {
///     #[error("I/O failure{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &std::path::Path) -> Result<Vec<u8>, StorageError> {
///     std::fs::read(path).context("Reading stored value")
/// }
/// ```
#[proc_macro_attribute]
pub fn furever_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
