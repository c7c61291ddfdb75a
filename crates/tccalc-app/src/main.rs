//! tccalc - timecode converter & calculator
//!
//! Entry point: logging setup, argument parsing, printing.

use anyhow::Result;
use clap::Parser;
use tccalc_app::Cli;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for results
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    print!("{}", tccalc_app::run(&cli)?);

    Ok(())
}
