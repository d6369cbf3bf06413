use crate::error::{StorageError, StorageErrorExt};
use crate::file::{Compression, FileStore, FileStoreInner};
use private::Sealed;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use tracing::info;

#[derive(Debug, Clone)]
struct FileStoreConfig {
    compression: Compression,
    create: bool,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self { compression: Compression::None, create: true }
    }
}

#[derive(Debug, Default)]
pub struct NoRoot;
#[derive(Debug)]
pub struct WithRoot(PathBuf);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoRoot {}
impl Sealed for WithRoot {}

#[allow(private_bounds)]
#[derive(Debug, Default)]
pub struct FileStoreBuilder<S: Sealed = NoRoot> {
    state: S,
    config: FileStoreConfig,
}

#[allow(private_bounds)]
impl<S: Sealed> FileStoreBuilder<S> {
    #[must_use = "Sets compression for stored values"]
    pub const fn compression(mut self, compression: Compression) -> Self {
        self.config.compression = compression;
        self
    }

    #[must_use = "Sets whether the root directory is created when missing"]
    pub const fn create(mut self, enable: bool) -> Self {
        self.config.create = enable;
        self
    }

    fn transition<N: Sealed>(self, state: N) -> FileStoreBuilder<N> {
        FileStoreBuilder { state, config: self.config }
    }
}

impl FileStoreBuilder<NoRoot> {
    #[must_use = "Creates a new file store builder with default configuration"]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "Sets the root directory of the store"]
    pub fn root(self, path: impl Into<PathBuf>) -> FileStoreBuilder<WithRoot> {
        self.transition(WithRoot(path.into()))
    }
}

impl FileStoreBuilder<WithRoot> {
    /// Opens the store.
    ///
    /// Creates the root when `create(true)` (the default), canonicalizes it so symlinked
    /// values can be detected, then purges stale temporary files. A failed purge is logged
    /// and does not prevent opening.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::RootUnavailable`] if the root is missing and `create` is false,
    /// or [`StorageError::Io`] if it cannot be created or resolved.
    pub fn open(self) -> Result<FileStore, StorageError> {
        let root = &self.state.0;

        if self.config.create {
            fs::create_dir_all(root)
                .context(format!("Failed to bootstrap store root: {}", root.display()))?;
        } else if !root.is_dir() {
            return Err(StorageError::RootUnavailable {
                message: root.display().to_string().into(),
                context: Some("Store root does not exist and creation is disabled".into()),
            });
        }

        let canonical = fs::canonicalize(root)
            .context(format!("Failed to resolve store root: {}", root.display()))?;
        info!(path = %canonical.display(), compression = ?self.config.compression, "Opened file store");

        let store = FileStore {
            inner: Arc::new(FileStoreInner {
                root: canonical,
                compression: self.config.compression,
                tmp_counter: AtomicU64::new(1),
            }),
        };

        store.purge_tmp();
        Ok(store)
    }
}
