//! API request, response and error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::aggregate::Summary;
use crate::config::Config;
use crate::error_handling::BatchError;

/// Shared state for every request.
///
/// Holds only the HTTP client and the configuration; batches never share
/// anything else.
#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub config: Config,
}

/// Form body of `POST /check_links`.
#[derive(Debug, Deserialize)]
pub struct CheckLinksForm {
    /// Whitespace-separated URL tokens
    pub urls: Option<String>,
}

/// JSON body of a successful `POST /check_links`.
#[derive(Debug, Serialize)]
pub struct CheckLinksResponse {
    pub summary: Summary,
    pub csv: String,
}

/// Errors surfaced at the HTTP boundary, each with a fixed public message.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No URLs provided")]
    NoUrls,

    #[error("Not found")]
    NotFound,

    /// Details are logged, never returned to the client.
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NoUrls => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BatchError> for ApiError {
    fn from(err: BatchError) -> Self {
        match err {
            BatchError::NoUrls => ApiError::NoUrls,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(details) = &self {
            log::error!("Server error: {}", details);
        }
        let body = Json(json!({ "error": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}
