//! Error categorization.
//!
//! Maps `reqwest` failures to transport error kinds and non-200 status codes
//! to info metrics.

use super::stats::ProcessingStats;
use super::types::{ErrorType, InfoType};
use crate::config::{
    HTTP_STATUS_FORBIDDEN, HTTP_STATUS_NOT_FOUND, HTTP_STATUS_OK, HTTP_STATUS_TOO_MANY_REQUESTS,
};
use crate::models::TransportErrorKind;

/// Categorizes a `reqwest::Error` into a `TransportErrorKind`.
///
/// Only errors raised before a usable response existed reach this function; a
/// received status code is never an error here (the fetcher does not call
/// `error_for_status`).
///
/// Connect and timeout are checked before the generic request kind because
/// reqwest reports both as request errors as well.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> TransportErrorKind {
    if error.is_builder() {
        TransportErrorKind::Builder
    } else if error.is_redirect() {
        TransportErrorKind::Redirect
    } else if error.is_timeout() {
        TransportErrorKind::Timeout
    } else if error.is_connect() {
        TransportErrorKind::Connect
    } else if error.is_request() {
        TransportErrorKind::Request
    } else if error.is_body() {
        TransportErrorKind::Body
    } else if error.is_decode() {
        TransportErrorKind::Decode
    } else {
        TransportErrorKind::Other
    }
}

/// Info metric for a received status code, `None` for 200.
pub fn categorize_status(code: u16) -> Option<InfoType> {
    match code {
        HTTP_STATUS_OK => None,
        HTTP_STATUS_FORBIDDEN => Some(InfoType::HttpForbidden),
        HTTP_STATUS_NOT_FOUND => Some(InfoType::HttpNotFound),
        HTTP_STATUS_TOO_MANY_REQUESTS => Some(InfoType::HttpTooManyRequests),
        500..=599 => Some(InfoType::HttpServerError),
        _ => Some(InfoType::HttpOtherStatus),
    }
}

/// Records a transport failure in the batch statistics.
pub fn update_error_stats(stats: &ProcessingStats, kind: TransportErrorKind) {
    stats.increment_error(ErrorType::from(kind));
}
