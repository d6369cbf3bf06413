//! Storage port for the FurEver portal.
//!
//! Panels never touch a global store; they receive a [`KeyValueStore`] and persist JSON text
//! under fixed keys. Two implementations ship with the crate:
//!
//! - **[`MemoryStore`]**: a lock-protected map for tests and throwaway sessions.
//! - **[`FileStore`]**: one file per key in a sandboxed directory, written with an atomic
//!   swap (unique temp + `fsync` + `rename`), optionally LZ4-compressed, self-healing on open.
//!
//! Keys are validated by [`StorageKey`]: ASCII letters, digits, `_` and `-`, at most
//! [`MAX_KEY_LEN`] bytes, case preserved.
//!
//! # Examples
//!
//! ```rust
//! use furever_storage::{KeyValueStore, MemoryStore, StorageError};
//!
//! # fn main() -> Result<(), StorageError> {
//! let store = MemoryStore::new();
//! store.set("homepageFormData", r#"{"userName":"Ana","userType":"shelter"}"#)?;
//! assert!(store.contains("homepageFormData")?);
//! # Ok(())
//! # }
//! ```

mod builder;
mod error;
mod file;
mod key;
mod maintenance;
mod memory;
mod store;

pub use builder::FileStoreBuilder;
pub use error::{StorageError, StorageErrorExt};
pub use file::{Compression, FileStore};
pub use key::{MAX_KEY_LEN, StorageKey};
pub use memory::MemoryStore;
pub use store::KeyValueStore;
