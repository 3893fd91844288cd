//! Shared resources for fetch workers.

use std::sync::Arc;

use crate::app::BatchLogger;
use crate::error_handling::ProcessingStats;

/// Everything a fetch worker needs, scoped to one batch.
///
/// Shared between workers behind an `Arc`; the client's connection pool is the
/// only resource that outlives the batch.
#[derive(Clone)]
pub struct FetchContext {
    /// HTTP client (timeout, redirect policy and User-Agent preconfigured)
    pub client: reqwest::Client,
    /// Logger bound to the current batch
    pub logger: BatchLogger,
    /// Statistics for the current batch
    pub stats: Arc<ProcessingStats>,
}

impl FetchContext {
    pub fn new(client: reqwest::Client, logger: BatchLogger, stats: Arc<ProcessingStats>) -> Self {
        Self {
            client,
            logger,
            stats,
        }
    }
}
