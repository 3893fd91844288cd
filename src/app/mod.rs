//! Application support modules.
//!
//! This module provides URL normalization, request-scoped batch logging,
//! statistics reporting, and shutdown handling.

pub mod logging;
pub mod shutdown;
pub mod statistics;
pub mod url;

// Re-export public API
pub use logging::BatchLogger;
pub use shutdown::shutdown_signal;
pub use statistics::log_batch_statistics;
pub use url::normalize_url;
