#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tracing::error;

use pwkeeper::cli::Cli;
use pwkeeper::gui::run_login;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = pwkeeper::bootstrap(&cli)?;

    run_login(&config).inspect_err(|err| error!("login window failed: err={err:#}"))
}
