use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level portal configuration (`furever.toml` plus `FUREVER__*` overrides).
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub storage: StorageConfig,
    pub fixtures: FixtureConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Where the per-user key/value store lives.
///
/// `data_dir = None` keeps everything in memory for the lifetime of the process.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: Option<PathBuf>,
    pub compression: bool,
}

/// Static JSON fixtures.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    pub products: PathBuf,
    pub pets: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Optional `EnvFilter` directives, e.g. `furever_adoption=debug`.
    pub filter: Option<String>,
    pub console: bool,
    pub directory: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
}

// --- Default ---

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: Some(PathBuf::from(".furever")), compression: false }
    }
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            products: PathBuf::from("fixtures/pet-products.json"),
            pets: PathBuf::from("fixtures/adoptable-pets.json"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            filter: None,
            console: true,
            directory: None,
            json: false,
            max_files: 7,
        }
    }
}
