//! Tracing subscriber with a level that can be raised or lowered after startup
//!
//! The subscriber goes in before the config is read, so messages from
//! config loading are not lost. The configured level is applied afterwards.

use anyhow::{Context, Result};
use tracing::{Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{Registry, reload};

/// Level used until the config has been loaded
pub const STARTUP_LEVEL: LevelFilter = LevelFilter::INFO;

pub type LevelHandle = reload::Handle<LevelFilter, Registry>;

/// Build a fmt subscriber writing to `writer`, plus a handle to change its level
pub fn subscriber<W>(writer: W, ansi: bool) -> (impl Subscriber + Send + Sync + 'static, LevelHandle)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(STARTUP_LEVEL);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(ansi));
    (subscriber, handle)
}

pub fn set_level(handle: &LevelHandle, level: Level) -> Result<()> {
    handle
        .modify(|filter| *filter = LevelFilter::from_level(level))
        .context("Failed to apply log level")
}
