//! Configuration constants.
//!
//! Every policy threshold of the audit pipeline lives here so it can be
//! reviewed and tested in isolation.

/// Minimum number of visible characters (Unicode code points, whitespace
/// collapsed) for a page to count as having significant content.
///
/// Inclusive: 370 is sufficient, 369 is not.
pub const MIN_CONTENT_CHARS: usize = 370;

/// Maximum number of URLs processed per batch.
///
/// Tokens past this cap are dropped silently; it is a safety limit, not an error.
pub const MAX_URLS_PER_BATCH: usize = 1000;

/// Total per-request fetch timeout in seconds (connect + headers + body).
pub const FETCH_TIMEOUT_SECS: u64 = 10;

// Redirect handling
/// Maximum number of redirect hops to follow before the fetch is reported as failed.
pub const MAX_REDIRECT_HOPS: usize = 10;

// Worker pool
/// Default number of concurrent fetch workers per batch
pub const DEFAULT_MAX_CONCURRENCY: usize = 20;
/// Upper bound accepted for `max_concurrency`
pub const MAX_CONCURRENCY_LIMIT: usize = 100;

// Server
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

/// Default User-Agent header sent with every fetch.
///
/// A desktop browser string; some sites answer non-browser agents with 403.
/// Override with `--user-agent`.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

/// Literal written in place of a status code when no HTTP response was obtained.
pub const ERROR_MARKER: &str = "Error";

// HTTP status codes (for clarity and consistency)
pub const HTTP_STATUS_OK: u16 = 200;
pub const HTTP_STATUS_FORBIDDEN: u16 = 403;
pub const HTTP_STATUS_NOT_FOUND: u16 = 404;
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;
