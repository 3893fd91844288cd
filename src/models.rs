//! Per-URL audit records.

use std::fmt;

use strum_macros::EnumIter as EnumIterMacro;

use crate::config::{ERROR_MARKER, HTTP_STATUS_FORBIDDEN, HTTP_STATUS_OK};

/// Why a fetch produced no HTTP response at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum TransportErrorKind {
    /// The request could not be built (malformed URL, bad header)
    Builder,
    /// Redirect limit exceeded or redirect loop
    Redirect,
    /// No complete response within the fetch timeout
    Timeout,
    /// DNS failure, refused connection, TLS handshake failure
    Connect,
    /// Other failure while sending the request
    Request,
    /// Failure while reading the response body
    Body,
    /// Body could not be decoded
    Decode,
    /// Anything else, including a fetch task that panicked
    Other,
}

impl TransportErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportErrorKind::Builder => "request builder error",
            TransportErrorKind::Redirect => "redirect error",
            TransportErrorKind::Timeout => "timeout",
            TransportErrorKind::Connect => "connection error",
            TransportErrorKind::Request => "request error",
            TransportErrorKind::Body => "body error",
            TransportErrorKind::Decode => "decode error",
            TransportErrorKind::Other => "other error",
        }
    }
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single fetch: an HTTP status, or no response at all.
///
/// Displays as the numeric code or the literal `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Http(u16),
    TransportError(TransportErrorKind),
}

impl LinkStatus {
    /// `true` only for HTTP 200.
    pub fn is_ok(&self) -> bool {
        matches!(self, LinkStatus::Http(HTTP_STATUS_OK))
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, LinkStatus::Http(HTTP_STATUS_FORBIDDEN))
    }

    /// Numeric status code, if a response was received.
    pub fn code(&self) -> Option<u16> {
        match self {
            LinkStatus::Http(code) => Some(*code),
            LinkStatus::TransportError(_) => None,
        }
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkStatus::Http(code) => write!(f, "{code}"),
            LinkStatus::TransportError(_) => f.write_str(ERROR_MARKER),
        }
    }
}

/// Audit result for one input URL. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkResult {
    /// Normalized URL that was fetched
    pub url: String,
    pub status: LinkStatus,
    /// Only ever `true` for a 200 response whose content passed the classifier
    pub has_minimum_content: bool,
}

impl LinkResult {
    /// Result for a response that arrived with `code`.
    ///
    /// Content can only be significant on a 200; any other code forces `false`.
    pub fn http(url: impl Into<String>, code: u16, has_minimum_content: bool) -> Self {
        Self {
            url: url.into(),
            status: LinkStatus::Http(code),
            has_minimum_content: code == HTTP_STATUS_OK && has_minimum_content,
        }
    }

    /// Result for a fetch that produced no response.
    pub fn transport_error(url: impl Into<String>, kind: TransportErrorKind) -> Self {
        Self {
            url: url.into(),
            status: LinkStatus::TransportError(kind),
            has_minimum_content: false,
        }
    }
}
