//! Sandboxed, file-backed implementation of [`KeyValueStore`].
//!
//! Every key maps to exactly one file directly under the store root. Writes use the
//! unique-temp + `fsync` + `rename` swap so a crash never leaves a half-written value behind;
//! leftovers from interrupted swaps are purged when the store is opened.

use crate::builder::FileStoreBuilder;
use crate::error::{StorageError, StorageErrorExt};
use crate::key::StorageKey;
use crate::maintenance;
use crate::store::KeyValueStore;
use std::fs;
use std::io::{ErrorKind, Write};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// Extension of value files.
pub(crate) const VALUE_EXT: &str = "kv";
/// Marker embedded in temporary file names.
pub(crate) const TMP_MARKER: &str = ".fvtmp.";

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum Compression {
    #[default]
    None,
    Lz4,
}

impl Compression {
    fn compress(self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::None => data.to_vec(),
            Self::Lz4 => lz4_flex::compress_prepend_size(data),
        }
    }

    fn decompress(self, data: Vec<u8>) -> Result<Vec<u8>, StorageError> {
        match self {
            Self::None => Ok(data),
            Self::Lz4 => {
                lz4_flex::decompress_size_prepended(&data).context("Lz4 decompression failed")
            },
        }
    }
}

#[derive(Debug)]
pub struct FileStoreInner {
    /// Canonicalized store directory.
    pub(crate) root: PathBuf,
    pub(crate) compression: Compression,
    pub(crate) tmp_counter: AtomicU64,
}

/// A cheap-to-clone handle to a directory of stored values.
///
/// # Example
///
/// ```rust
/// use furever_storage::{Compression, FileStore, KeyValueStore, StorageError};
///
/// # fn main() -> Result<(), StorageError> {
/// # let tmp = tempfile::tempdir().unwrap();
/// let store = FileStore::builder().root(tmp.path().join("data")).compression(Compression::Lz4).open()?;
///
/// store.set("petWishlist", "[1,3]")?;
/// assert_eq!(store.get("petWishlist")?.as_deref(), Some("[1,3]"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    pub(crate) inner: Arc<FileStoreInner>,
}

impl Deref for FileStore {
    type Target = FileStoreInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FileStore {
    #[must_use = "The store is not opened until you call .open()"]
    pub fn builder() -> FileStoreBuilder {
        FileStoreBuilder::new()
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Physical path of the file holding `key`.
    ///
    /// # Errors
    /// Returns [`StorageError::InvalidKey`] for malformed keys and
    /// [`StorageError::PathTraversalAttempt`] if an existing file resolves outside the root
    /// (for example through a symlink).
    pub fn resolve(&self, key: &str) -> Result<PathBuf, StorageError> {
        let key = StorageKey::try_from(key)?;
        let path = self.root.join(format!("{key}.{VALUE_EXT}"));

        match path.canonicalize() {
            Ok(canonical) if !canonical.starts_with(&self.root) => {
                Err(StorageError::PathTraversalAttempt {
                    message: canonical.display().to_string().into(),
                    context: Some(format!("Value file for '{key}' escapes the store root").into()),
                })
            },
            _ => Ok(path),
        }
    }

    /// Removes temporary files left behind by interrupted writes.
    ///
    /// Returns `(removed, failed)`.
    pub fn purge_tmp(&self) -> (usize, usize) {
        maintenance::purge_tmp(&self.root)
    }

    fn write_atomic(&self, target: &Path, data: &[u8]) -> Result<(), StorageError> {
        let temp = unique_tmp_path(target, &self.tmp_counter);

        {
            let mut file = fs::OpenOptions::new()
                .create_new(true)
                .write(true)
                .open(&temp)
                .context(format!("Temp creation failed: {}", temp.display()))?;
            file.write_all(data).context("Write failed")?;
            file.sync_all().context("Hardware sync failed")?;
        }

        if let Err(err) = fs::rename(&temp, target) {
            if err.kind() == ErrorKind::AlreadyExists {
                fs::remove_file(target)
                    .context(format!("Failed to replace existing file: {}", target.display()))?;
                fs::rename(&temp, target).context(format!(
                    "Atomic swap failed: {} -> {}",
                    temp.display(),
                    target.display()
                ))?;
            } else {
                let _ = fs::remove_file(&temp);
                return Err(StorageError::Io {
                    source: err,
                    context: Some(
                        format!("Atomic swap failed: {} -> {}", temp.display(), target.display())
                            .into(),
                    ),
                });
            }
        }

        sync_dir(&self.root);
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.resolve(key)?;

        let raw = match fs::read(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(StorageError::Io {
                    source: err,
                    context: Some(format!("Read failed: {}", path.display()).into()),
                });
            },
        };

        let bytes = self.compression.decompress(raw)?;
        String::from_utf8(bytes).context(format!("Decoding value of '{key}'")).map(Some)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.resolve(key)?;
        let data = self.compression.compress(value.as_bytes());
        self.write_atomic(&path, &data)?;
        debug!(key, bytes = data.len(), "Value saved atomically");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.resolve(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(key, "Value removed");
                Ok(())
            },
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Io {
                source: err,
                context: Some(format!("Failed to delete: {}", path.display()).into()),
            }),
        }
    }
}

fn sync_dir(path: &Path) {
    match fs::File::open(path) {
        Ok(dir) => {
            if let Err(err) = dir.sync_all() {
                warn!(path = %path.display(), error = %err, "Directory sync failed");
            }
        },
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Directory open failed");
        },
    }
}

fn unique_tmp_path(target: &Path, counter: &AtomicU64) -> PathBuf {
    let counter = counter.fetch_add(1, Ordering::Relaxed);
    let file_name = target.file_name().and_then(|s| s.to_str()).unwrap_or("value");
    target.with_file_name(format!("{file_name}{TMP_MARKER}{counter}"))
}
