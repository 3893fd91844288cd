//! Bounded fetch worker pool.
//!
//! Fan-out: a semaphore admits at most `max_concurrency` spawned fetch tasks
//! at a time, each tagged with its input index. Fan-in: results are drained
//! in completion order and slotted back by index, so the output order always
//! matches the input order.

use std::sync::Arc;

use futures::stream::FuturesUnordered;
use futures::StreamExt;

use crate::error_handling::ErrorType;
use crate::fetch::{fetch_link, FetchContext};
use crate::initialization::init_semaphore;
use crate::models::{LinkResult, TransportErrorKind};

/// Fetches every URL and returns one result per URL, in input order.
///
/// A task that panics or cannot be scheduled yields a transport error result
/// for its own slot only.
pub async fn fetch_all(
    urls: Vec<String>,
    ctx: Arc<FetchContext>,
    max_concurrency: usize,
) -> Vec<LinkResult> {
    let semaphore = init_semaphore(max_concurrency);
    let mut slots: Vec<Option<LinkResult>> = (0..urls.len()).map(|_| None).collect();
    let mut tasks = FuturesUnordered::new();

    for (index, url) in urls.iter().enumerate() {
        let permit = match Arc::clone(&semaphore).acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => {
                ctx.logger
                    .warn(format_args!("Worker pool closed, skipping URL: {url}"));
                slots[index] = Some(LinkResult::transport_error(
                    url.as_str(),
                    TransportErrorKind::Other,
                ));
                continue;
            }
        };

        let task_ctx = Arc::clone(&ctx);
        let task_url = url.clone();
        let handle = tokio::spawn(async move {
            let _permit = permit;
            fetch_link(&task_ctx, &task_url).await
        });
        tasks.push(async move { (index, handle.await) });
    }

    while let Some((index, joined)) = tasks.next().await {
        let result = match joined {
            Ok(result) => result,
            Err(join_error) => {
                ctx.stats.increment_error(ErrorType::FetchTaskPanicked);
                ctx.logger.error(format_args!(
                    "Fetch task for {} failed: {:?}",
                    urls[index], join_error
                ));
                LinkResult::transport_error(urls[index].as_str(), TransportErrorKind::Other)
            }
        };
        slots[index] = Some(result);
    }

    slots
        .into_iter()
        .zip(urls)
        .map(|(slot, url)| {
            slot.unwrap_or_else(|| LinkResult::transport_error(url, TransportErrorKind::Other))
        })
        .collect()
}
