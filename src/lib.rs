//! link_audit library: batch URL reachability and content auditing
//!
//! Given a list of URLs, this library fetches each one, classifies the
//! outcome (HTTP status or transport error), checks whether successful pages
//! carry a significant amount of visible text, and produces a summary plus a
//! two-table CSV report.
//!
//! # Example
//!
//! ```no_run
//! use link_audit::initialization::init_client;
//! use link_audit::{run_batch, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let client = init_client(&config)?;
//!
//! let report = run_batch("example.com https://www.rust-lang.org", &client, &config).await?;
//! println!("{}", report.to_csv()?);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod aggregate;
pub mod app;
pub mod batch;
pub mod config;
pub mod content;
pub mod error_handling;
pub mod export;
pub mod fetch;
pub mod initialization;
pub mod models;
pub mod server;
mod utils;

// Re-export public API
pub use aggregate::{Aggregate, Summary};
pub use app::normalize_url;
pub use batch::{run_batch, BatchReport};
pub use config::{Config, LogFormat, LogLevel};
pub use content::{analyze_html, ContentAnalysis};
pub use error_handling::BatchError;
pub use models::{LinkResult, LinkStatus, TransportErrorKind};
pub use run::run_check;

// Command-line batch mode (the `check` subcommand)
mod run {
    use std::path::Path;

    use anyhow::{Context, Result};
    use tokio::io::AsyncReadExt;

    use crate::batch::{run_batch, BatchReport};
    use crate::config::Config;
    use crate::export::export_csv;
    use crate::initialization::init_client;

    /// Audits the URLs listed in `input` (`-` reads stdin) and writes the CSV
    /// report to `output`, or stdout when `output` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read, holds no URLs, or the
    /// report cannot be written.
    pub async fn run_check(
        config: &Config,
        input: &Path,
        output: Option<&Path>,
    ) -> Result<BatchReport> {
        let raw = read_input(input).await?;
        let client = init_client(config).context("Failed to initialize HTTP client")?;

        let report = run_batch(&raw, &client, config).await?;

        export_csv(&report.aggregate, &report.results, output)
            .context("Failed to write CSV report")?;
        if let Some(path) = output {
            log::info!("Report written to {}", path.display());
        }

        Ok(report)
    }

    async fn read_input(input: &Path) -> Result<String> {
        if input.as_os_str() == "-" {
            let mut raw = String::new();
            tokio::io::stdin()
                .read_to_string(&mut raw)
                .await
                .context("Failed to read URLs from stdin")?;
            Ok(raw)
        } else {
            tokio::fs::read_to_string(input)
                .await
                .with_context(|| format!("Failed to read URL file: {}", input.display()))
        }
    }
}
