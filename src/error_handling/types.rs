//! Error type definitions.
//!
//! This module defines the error, warning, and info types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::models::TransportErrorKind;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Input errors that reject a batch before any fetch starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// The request body held no URL tokens.
    #[error("No URLs provided")]
    NoUrls,
}

/// Fetches that ended without an HTTP response, by cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestRequestError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    FetchTaskPanicked,
}

/// 200 responses that were fetched fine but judged thin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    InsufficientContent,
}

/// Notable, non-fatal outcomes worth counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    HttpRedirect,        // Final URL differs from the requested one
    HttpForbidden,       // 403, excluded from the invalid percentage
    HttpNotFound,        // 404
    HttpTooManyRequests, // 429
    HttpServerError,     // any 5xx
    HttpOtherStatus,     // any other non-200 code
}

impl From<TransportErrorKind> for ErrorType {
    fn from(kind: TransportErrorKind) -> Self {
        match kind {
            TransportErrorKind::Builder => ErrorType::HttpRequestBuilderError,
            TransportErrorKind::Redirect => ErrorType::HttpRequestRedirectError,
            TransportErrorKind::Timeout => ErrorType::HttpRequestTimeoutError,
            TransportErrorKind::Connect => ErrorType::HttpRequestConnectError,
            TransportErrorKind::Request => ErrorType::HttpRequestRequestError,
            TransportErrorKind::Body => ErrorType::HttpRequestBodyError,
            TransportErrorKind::Decode => ErrorType::HttpRequestDecodeError,
            TransportErrorKind::Other => ErrorType::HttpRequestOtherError,
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::FetchTaskPanicked => "Fetch task panicked",
        }
    }
}

impl WarningType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::InsufficientContent => "Insufficient content",
        }
    }
}

impl InfoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::HttpRedirect => "HTTP redirect",
            InfoType::HttpForbidden => "Forbidden (403)",
            InfoType::HttpNotFound => "Not Found (404)",
            InfoType::HttpTooManyRequests => "Too Many Requests (429)",
            InfoType::HttpServerError => "Server error (5xx)",
            InfoType::HttpOtherStatus => "Other non-200 status",
        }
    }
}
