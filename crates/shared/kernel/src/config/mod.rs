use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// Base name of the configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "furever";
/// Prefix of environment overrides (`FUREVER__STORAGE__DATA_DIR`).
pub const ENV_PREFIX: &str = "FUREVER";

/// Custom error type for config loading.
#[furever_derive::furever_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration loader: file first, then environment overrides.
///
/// 1. **Base File**: an explicit `path` must exist. Without one, `furever.{toml,json,yaml,...}`
///    in the working directory is used when present and silently skipped otherwise.
/// 2. **Environment Overrides**: variables prefixed with `FUREVER__`, nested with double
///    underscores (`FUREVER__LOGGING__LEVEL=debug` maps to `logging.level`).
///
/// Sections missing from both layers fall back to the target type's `#[serde(default)]`.
///
/// # Errors
/// * The explicit file cannot be found or parsed.
/// * A value does not match the structure of `T`.
///
/// # Example
/// ```rust
/// use furever_kernel::config::load_config;
/// use furever_domain::config::AppConfig;
///
/// let cfg: AppConfig = load_config(None::<&str>).unwrap_or_default();
/// assert_eq!(cfg.logging.max_files, 7);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_with_env(path, Environment::with_prefix(ENV_PREFIX))
}

pub(crate) fn load_with_env<T>(
    path: Option<impl AsRef<Path>>,
    env: Environment,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match path.map(|p| p.as_ref().to_path_buf()) {
        Some(p) => {
            info!("Loading config from {}", p.display());
            File::from(p.as_path()).required(true)
        },
        None => {
            debug!("Looking for optional config file '{DEFAULT_CONFIG_FILE}'");
            File::with_name(DEFAULT_CONFIG_FILE).required(false)
        },
    };

    let config = Config::builder()
        .add_source(file)
        .add_source(
            env.separator("__")
                .prefix_separator("__")
                .try_parsing(true)
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
