//! Route handlers.

use std::any::Any;
use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;

use super::extract::UrlsField;
use super::types::{ApiError, AppState, CheckLinksResponse};
use crate::batch::run_batch;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// `GET /`
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `POST /check_links`
///
/// Accepts urlencoded and multipart forms. A missing or unparseable form is
/// treated the same as an empty URL list.
pub async fn check_links_handler(
    State(state): State<Arc<AppState>>,
    UrlsField(urls): UrlsField,
) -> Result<Json<CheckLinksResponse>, ApiError> {
    let raw = urls.ok_or(ApiError::NoUrls)?;

    let report = run_batch(&raw, &state.client, &state.config).await?;
    let csv = report
        .to_csv()
        .map_err(|e| ApiError::Internal(format!("{:#}", e)))?;

    Ok(Json(CheckLinksResponse {
        summary: report.summary(),
        csv,
    }))
}

/// Fallback for unmatched routes.
pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}

/// Turns a handler panic into the generic 500 body, logging the payload.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    ApiError::Internal(format!("handler panicked: {}", details)).into_response()
}
