//! Application configuration and constants.
//!
//! This module provides:
//! - Policy constants (content threshold, batch cap, timeouts)
//! - The library `Config` struct and its validation
//! - Command-line option types

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{Cli, Command, CommonArgs};
pub use constants::*;
pub use types::{Config, ConfigValidationError, LogFormat, LogLevel};
