mod cli;
mod commands;

use clap::Parser as _;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use stepfs_core::config::LOG_ENV_VAR;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_tracing(&cli);
    debug!("Parsed CLI arguments: {cli:?}");

    let output = commands::run(cli.command)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Log to stderr so stdout stays machine-readable.
///
/// `STEPFS_LOG` takes precedence over `-v` flags.
fn setup_tracing(cli: &Cli) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(cli.log_level()).into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
}
