#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod gui;
pub mod logging;

use anyhow::{Context, Result};
use tracing::info;

use cli::Cli;
use config::AppConfig;
use logging::LevelHandle;

/// Install the tracing subscriber, then load config and apply CLI overrides
pub fn bootstrap(cli: &Cli) -> Result<AppConfig> {
    let (subscriber, level) = logging::subscriber(std::io::stdout, true);
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;

    load_config(cli, &level)
}

/// Load config, apply CLI overrides and switch the subscriber to the configured level
pub fn load_config(cli: &Cli, level: &LevelHandle) -> Result<AppConfig> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone();
        config.validate_and_clamp();
    }

    logging::set_level(level, config.tracing_level())?;
    info!("config={:#?}", config);
    Ok(config)
}
