#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tracing::error;

use pwkeeper::cli::Cli;
use pwkeeper::gui::run_manager;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = pwkeeper::bootstrap(&cli)?;

    run_manager(&config).inspect_err(|err| error!("main window failed: err={err:#}"))
}
