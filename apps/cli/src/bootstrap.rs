use crate::args::Cli;
use anyhow::{Context, Result};
use furever::Portal;
use furever::domain::config::{AppConfig, LoggingConfig};
use furever::kernel::config::load_config;
use furever_logger::{LevelFilter, Logger, parse_level};

/// Layered configuration with command-line overrides applied.
pub(crate) fn config(cli: &Cli) -> Result<AppConfig> {
    let mut config: AppConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;

    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = Some(dir.clone());
    }
    if cli.verbose {
        "debug".clone_into(&mut config.logging.level);
    }
    Ok(config)
}

/// Installs the global subscriber, or nothing when every output is switched off.
pub(crate) fn logger(config: &LoggingConfig) -> Result<Option<Logger>> {
    if !config.console && config.directory.is_none() {
        return Ok(None);
    }

    let level = parse_level(&config.level).unwrap_or(LevelFilter::WARN);
    let mut builder =
        Logger::builder().name(env!("CARGO_PKG_NAME")).level(level).console(config.console);
    if let Some(filter) = &config.filter {
        builder = builder.env_filter(filter.clone());
    }

    let logger = match &config.directory {
        Some(dir) => builder.path(dir).max_files(config.max_files).json(config.json).init(),
        None => builder.init(),
    };
    logger.map(Some).context("Failed to initialize logging")
}

pub(crate) fn portal(config: AppConfig) -> Result<Portal> {
    Portal::open(config).context("Failed to open portal data")
}
