//! Command-line options.
//!
//! `serve` runs the HTTP API; `check` audits a URL list from a file or stdin
//! and prints the CSV report.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_MAX_CONCURRENCY, DEFAULT_PORT, DEFAULT_USER_AGENT,
    FETCH_TIMEOUT_SECS,
};
use crate::config::types::{Config, LogFormat, LogLevel};

/// link_audit command line.
#[derive(Debug, Parser)]
#[command(name = "link_audit", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the `POST /check_links` API
    Serve {
        /// Address to bind
        #[arg(long, default_value = DEFAULT_BIND_ADDRESS)]
        bind: String,

        /// Port to listen on
        #[arg(long, short, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Audit whitespace-separated URLs read from FILE (`-` for stdin)
    Check {
        /// Input file, or `-` for stdin
        file: PathBuf,

        /// Write the CSV report here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// Concurrent fetch workers per batch
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY, global = true)]
    pub max_concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = FETCH_TIMEOUT_SECS, global = true)]
    pub timeout_seconds: u64,

    /// User-Agent header sent with every fetch
    #[arg(long, default_value = DEFAULT_USER_AGENT, global = true)]
    pub user_agent: String,
}

impl Cli {
    /// Builds the library `Config` from parsed arguments.
    pub fn to_config(&self) -> Config {
        let mut config = Config {
            log_level: self.common.log_level.clone(),
            log_format: self.common.log_format.clone(),
            max_concurrency: self.common.max_concurrency,
            timeout_seconds: self.common.timeout_seconds,
            user_agent: self.common.user_agent.clone(),
            ..Default::default()
        };
        if let Command::Serve { bind, port } = &self.command {
            config.bind_address = bind.clone();
            config.port = *port;
        }
        config
    }
}
