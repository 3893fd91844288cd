//! Single-URL fetching.
//!
//! One GET per normalized URL, with every outcome mapped to a `LinkResult`:
//! - 200: the body is parsed and classified
//! - any other status: recorded as is, the body is never read
//! - no response (timeout, DNS, refused, TLS, redirect overflow, bad URL):
//!   recorded as a transport error
//!
//! Nothing escapes this boundary as an error, and nothing is retried.

mod charset;
mod context;

pub use charset::decode_body;
pub use context::FetchContext;

use crate::content::analyze_html;
use crate::error_handling::{
    categorize_reqwest_error, categorize_status, update_error_stats, InfoType, WarningType,
};
use crate::models::LinkResult;

/// Fetches `url` once and classifies the outcome.
pub async fn fetch_link(ctx: &FetchContext, url: &str) -> LinkResult {
    ctx.logger.debug(format_args!("Fetching {url}"));

    let response = match ctx.client.get(url).send().await {
        Ok(response) => response,
        Err(e) => return record_transport_error(ctx, url, &e),
    };

    let code = response.status().as_u16();
    if was_redirected(url, response.url()) {
        ctx.stats.increment_info(InfoType::HttpRedirect);
        ctx.logger
            .debug(format_args!("{url} redirected to {}", response.url()));
    }

    if let Some(info) = categorize_status(code) {
        ctx.stats.increment_info(info);
        ctx.logger
            .debug(format_args!("{url} returned {code}, content not evaluated"));
        return LinkResult::http(url, code, false);
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body = match response.bytes().await {
        Ok(body) => body,
        Err(e) => return record_transport_error(ctx, url, &e),
    };

    let analysis = analyze_html(&decode_body(&body, content_type.as_deref()));
    ctx.logger.debug(format_args!(
        "Character count: {} ({} region) for {url}",
        analysis.char_count,
        analysis.region.as_str()
    ));
    if !analysis.is_significant() {
        ctx.stats.increment_warning(WarningType::InsufficientContent);
    }

    LinkResult::http(url, code, analysis.is_significant())
}

fn record_transport_error(ctx: &FetchContext, url: &str, error: &reqwest::Error) -> LinkResult {
    let kind = categorize_reqwest_error(error);
    update_error_stats(&ctx.stats, kind);
    ctx.logger
        .warn(format_args!("Error checking URL {url} ({kind}): {error}"));
    LinkResult::transport_error(url, kind)
}

fn was_redirected(requested: &str, final_url: &reqwest::Url) -> bool {
    // Compare parsed forms: reqwest normalizes "https://host" to "https://host/"
    reqwest::Url::parse(requested)
        .map(|parsed| &parsed != final_url)
        .unwrap_or(false)
}
