//! Request body extraction for `POST /check_links`.
//!
//! The `urls` field is read from either a urlencoded or a
//! `multipart/form-data` body. Multipart file parts are not form fields and
//! are skipped.

use std::convert::Infallible;

use axum::async_trait;
use axum::extract::multipart::MultipartError;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header;
use axum::Form;

use super::types::CheckLinksForm;

const URLS_FIELD: &str = "urls";

/// The `urls` form field, `None` when absent or the body could not be read.
#[derive(Debug)]
pub struct UrlsField(pub Option<String>);

#[async_trait]
impl<S> FromRequest<S> for UrlsField
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_multipart(&req) {
            let urls = match Multipart::from_request(req, state).await {
                Ok(multipart) => urls_from_multipart(multipart)
                    .await
                    .inspect_err(|e| log::debug!("Unreadable multipart body: {}", e))
                    .ok()
                    .flatten(),
                Err(rejection) => {
                    log::debug!("Rejected multipart body: {}", rejection);
                    None
                }
            };
            return Ok(UrlsField(urls));
        }

        match Form::<CheckLinksForm>::from_request(req, state).await {
            Ok(Form(form)) => Ok(UrlsField(form.urls)),
            Err(rejection) => {
                log::debug!("Rejected form body: {}", rejection);
                Ok(UrlsField(None))
            }
        }
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| {
            content_type
                .trim_start()
                .to_ascii_lowercase()
                .starts_with("multipart/form-data")
        })
}

async fn urls_from_multipart(mut multipart: Multipart) -> Result<Option<String>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(URLS_FIELD) && field.file_name().is_none() {
            return field.text().await.map(Some);
        }
    }
    Ok(None)
}
