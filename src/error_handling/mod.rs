//! Error handling and per-batch processing statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, batch input)
//! - Categorization of `reqwest` failures into transport error kinds
//! - Per-batch statistics tracking (errors, warnings, info metrics)
//!
//! Statistics are split into:
//! - **Errors**: fetches that produced no HTTP response
//! - **Warnings**: 200 responses without significant content
//! - **Info**: notable non-200 statuses and redirects

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, categorize_status, update_error_stats};
pub use stats::ProcessingStats;
pub use types::{BatchError, ErrorType, InfoType, InitializationError, WarningType};
