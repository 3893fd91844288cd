//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `link_audit` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use link_audit::aggregate::format_percentage;
use link_audit::config::{Cli, Command};
use link_audit::initialization::{init_logger_with, load_dotenv};
use link_audit::run_check;
use link_audit::server::start_server;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env (RUST_LOG, for example)
    let env_file = load_dotenv();

    let cli = Cli::parse();
    let config = cli.to_config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;
    if let Some(path) = env_file {
        log::debug!("Loaded environment from {}", path.display());
    }

    if let Err(e) = config.validate() {
        eprintln!("link_audit error: {}", e);
        process::exit(2);
    }

    let outcome = match &cli.command {
        Command::Serve { .. } => start_server(config).await,
        Command::Check { file, output } => run_check(&config, file, output.as_deref())
            .await
            .map(|report| {
                let aggregate = &report.aggregate;
                eprintln!(
                    "Checked {} URL{} in {:.1}s: {} invalid ({} forbidden), {} without minimum content, {} invalid excluding 403",
                    aggregate.total,
                    if aggregate.total == 1 { "" } else { "s" },
                    report.elapsed_seconds,
                    aggregate.invalid,
                    aggregate.forbidden,
                    aggregate.total - aggregate.with_content,
                    format_percentage(aggregate.percentage_invalid)
                );
            }),
    };

    if let Err(e) = outcome {
        eprintln!("link_audit error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
