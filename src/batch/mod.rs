//! Batch orchestration.
//!
//! A batch is one request's worth of URLs: parsed from whitespace-separated
//! text, capped, normalized, fetched through the worker pool and summarized.
//! Nothing is shared between batches except the HTTP client.

mod pool;

pub use pool::fetch_all;

use std::sync::Arc;
use std::time::Instant;

use crate::aggregate::{format_percentage, Aggregate, Summary};
use crate::app::{log_batch_statistics, normalize_url, BatchLogger};
use crate::config::{Config, MAX_URLS_PER_BATCH};
use crate::error_handling::{BatchError, ProcessingStats};
use crate::export::render_report;
use crate::fetch::FetchContext;
use crate::models::LinkResult;

/// Everything produced by one batch.
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Batch identifier (format: `batch_<timestamp_millis>_<seq>`)
    pub batch_id: String,
    /// One result per processed URL, in input order
    pub results: Vec<LinkResult>,
    pub aggregate: Aggregate,
    pub elapsed_seconds: f64,
}

impl BatchReport {
    pub fn summary(&self) -> Summary {
        self.aggregate.summary()
    }

    /// Renders the two-table CSV report.
    pub fn to_csv(&self) -> anyhow::Result<String> {
        render_report(&self.aggregate, &self.results)
    }
}

/// Splits `raw` on whitespace.
///
/// # Errors
///
/// Returns `BatchError::NoUrls` when there are no tokens at all.
pub fn parse_url_tokens(raw: &str) -> Result<Vec<&str>, BatchError> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(BatchError::NoUrls);
    }
    Ok(tokens)
}

/// Keeps the first `MAX_URLS_PER_BATCH` tokens and normalizes each one.
///
/// Returns the URLs to fetch and the number of tokens dropped by the cap.
pub fn prepare_urls(tokens: &[&str]) -> (Vec<String>, usize) {
    let kept = tokens.len().min(MAX_URLS_PER_BATCH);
    let urls = tokens[..kept].iter().map(|t| normalize_url(t)).collect();
    (urls, tokens.len() - kept)
}

/// Audits every URL in `raw` and builds the batch report.
///
/// Individual fetch failures never fail the batch; they show up as `Error`
/// rows in the results.
///
/// # Errors
///
/// Returns `BatchError::NoUrls` if `raw` holds no URL tokens.
pub async fn run_batch(
    raw: &str,
    client: &reqwest::Client,
    config: &Config,
) -> Result<BatchReport, BatchError> {
    let start_time = Instant::now();
    let logger = BatchLogger::new();

    let tokens = parse_url_tokens(raw).inspect_err(|_| {
        logger.warn(format_args!("Rejected batch: no URLs provided"));
    })?;
    let (urls, dropped) = prepare_urls(&tokens);
    if dropped > 0 {
        logger.info(format_args!(
            "Received {} URLs, processing the first {} ({} dropped)",
            tokens.len(),
            urls.len(),
            dropped
        ));
    }
    logger.info(format_args!(
        "Checking {} URLs with {} workers",
        urls.len(),
        config.max_concurrency
    ));

    let stats = Arc::new(ProcessingStats::new());
    let ctx = Arc::new(FetchContext::new(
        client.clone(),
        logger.clone(),
        Arc::clone(&stats),
    ));
    let results = fetch_all(urls, ctx, config.max_concurrency).await;

    let aggregate = Aggregate::from_results(&results);
    let elapsed_seconds = start_time.elapsed().as_secs_f64();

    logger.info(format_args!(
        "Checked {} URLs in {:.2}s: {} valid, {} invalid ({} forbidden), {} with minimum content, {} invalid excluding 403",
        aggregate.total,
        elapsed_seconds,
        aggregate.valid,
        aggregate.invalid,
        aggregate.forbidden,
        aggregate.with_content,
        format_percentage(aggregate.percentage_invalid)
    ));
    log_batch_statistics(&logger, &stats);

    Ok(BatchReport {
        batch_id: logger.batch_id().to_string(),
        results,
        aggregate,
        elapsed_seconds,
    })
}
