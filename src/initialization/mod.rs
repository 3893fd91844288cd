//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - The HTTP client (timeout, redirect policy, User-Agent)
//! - The logger
//! - The fetch worker semaphore
//! - `.env` loading

mod client;
mod env;
mod logger;

use std::sync::Arc;

use tokio::sync::Semaphore;

// Re-export public API
pub use client::init_client;
pub use env::{load_dotenv, load_env_file};
pub use logger::init_logger_with;

/// Initializes a semaphore for controlling concurrency.
///
/// At least one permit is always created so a batch can make progress.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count.max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_semaphore_permits() {
        assert_eq!(init_semaphore(10).available_permits(), 10);
        assert_eq!(init_semaphore(0).available_permits(), 1);
    }
}
