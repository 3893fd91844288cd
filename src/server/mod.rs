//! HTTP API.
//!
//! Routes:
//! - `GET /` - form page
//! - `POST /check_links` - audit a batch, returns `{summary, csv}`
//!
//! Unmatched routes return `404 {"error": "Not found"}` and handler panics
//! return `500 {"error": "Internal server error"}`.

mod extract;
mod handlers;
mod types;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use tokio_util::sync::CancellationToken;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use crate::app::shutdown_signal;
use crate::config::Config;
use crate::initialization::init_client;
use handlers::{check_links_handler, handle_panic, index_handler, not_found_handler};
pub use types::{ApiError, AppState, CheckLinksForm, CheckLinksResponse};

/// Builds the full application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let routes = Router::new()
        .route("/", get(index_handler))
        .route("/check_links", post(check_links_handler))
        .with_state(state);
    with_middleware(routes)
}

/// Adds the JSON 404 fallback, panic recovery and CORS to `routes`.
pub fn with_middleware(routes: Router) -> Router {
    routes
        .fallback(not_found_handler)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
}

/// Binds `config.listen_address()` and serves until Ctrl-C.
pub async fn start_server(config: Config) -> Result<()> {
    let client = init_client(&config).context("Failed to initialize HTTP client")?;
    let address = config.listen_address();
    let state = Arc::new(AppState { client, config });
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind server to {}", address))?;

    log::info!("link_audit listening on http://{}/", address);
    log::info!("  - Form: http://{}/", address);
    log::info!("  - API: POST http://{}/check_links", address);

    let cancel = CancellationToken::new();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancel))
        .await
        .context("Server error")?;

    log::info!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let config = Config::default();
        let client = init_client(&config).expect("client");
        build_router(Arc::new(AppState { client, config }))
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("body is JSON")
    }

    fn form_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/check_links")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("request builds")
    }

    #[tokio::test]
    async fn test_blank_urls_returns_400() {
        let response = test_router()
            .oneshot(form_request("urls=+%0A+"))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "No URLs provided");
    }

    #[tokio::test]
    async fn test_missing_urls_field_returns_400() {
        let response = test_router()
            .oneshot(form_request("other=1"))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "No URLs provided");
    }

    #[tokio::test]
    async fn test_wrong_content_type_returns_400() {
        let request = Request::builder()
            .method("POST")
            .uri("/check_links")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"urls":"example.com"}"#))
            .expect("request builds");
        let response = test_router().oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    fn multipart_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/check_links")
            .header(header::CONTENT_TYPE, "multipart/form-data; boundary=XYZ")
            .body(Body::from(body))
            .expect("request builds")
    }

    #[tokio::test]
    async fn test_multipart_form_is_accepted() {
        let body = "--XYZ\r\n\
Content-Disposition: form-data; name=\"urls\"\r\n\
\r\n\
http://127.0.0.1:1/\r\n\
--XYZ--\r\n";
        let response = test_router()
            .oneshot(multipart_request(body))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["summary"]["Total Links Analyzed"], 1);
        assert_eq!(json["summary"]["Total Invalid Links"], 1);
        let csv = json["csv"].as_str().expect("csv is a string");
        assert!(csv.ends_with("http://127.0.0.1:1/,Error,No\n"));
    }

    #[tokio::test]
    async fn test_multipart_without_urls_field_returns_400() {
        let body = "--XYZ\r\n\
Content-Disposition: form-data; name=\"other\"\r\n\
\r\n\
example.com\r\n\
--XYZ--\r\n";
        let response = test_router()
            .oneshot(multipart_request(body))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "No URLs provided");
    }

    #[tokio::test]
    async fn test_multipart_file_part_is_not_a_form_field() {
        let body = "--XYZ\r\n\
Content-Disposition: form-data; name=\"urls\"; filename=\"urls.txt\"\r\n\
Content-Type: text/plain\r\n\
\r\n\
example.com\r\n\
--XYZ--\r\n";
        let response = test_router()
            .oneshot(multipart_request(body))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_404() {
        let request = Request::builder()
            .uri("/nope")
            .body(Body::empty())
            .expect("request builds");
        let response = test_router().oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"], "Not found");
    }

    #[tokio::test]
    async fn test_index_serves_form() {
        let request = Request::builder()
            .uri("/")
            .body(Body::empty())
            .expect("request builds");
        let response = test_router().oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        let page = String::from_utf8_lossy(&bytes);
        assert!(page.contains("/check_links"));
    }

    async fn boom() -> &'static str {
        panic!("boom")
    }

    #[tokio::test]
    async fn test_panic_returns_json_500() {
        let router = with_middleware(Router::new().route("/boom", get(boom)));
        let request = Request::builder()
            .uri("/boom")
            .body(Body::empty())
            .expect("request builds");
        let response = router.oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await["error"], "Internal server error");
    }
}
