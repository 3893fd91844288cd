//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, MAX_REDIRECT_HOPS};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client shared by every fetch worker.
///
/// Creates a `reqwest::Client` configured with:
/// - A total per-request timeout of `timeout_seconds`
/// - Redirect following, up to `MAX_REDIRECT_HOPS` hops
/// - The configured User-Agent header
///
/// The client owns a connection pool and is cheap to clone; clones share it.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the TLS backend cannot be
/// initialized or the User-Agent is not a valid header value.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_client_sends_configured_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("user-agent", "link_audit_test/1.0"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let config = Config {
            user_agent: "link_audit_test/1.0".to_string(),
            ..Default::default()
        };
        let client = init_client(&config).expect("client should build");
        let response = client.get(server.uri()).send().await.expect("request");
        assert_eq!(response.status().as_u16(), 200);
    }

    #[tokio::test]
    async fn test_client_follows_redirects() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(wiremock::matchers::path("/old"))
            .respond_with(ResponseTemplate::new(301).insert_header("Location", "/new"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(wiremock::matchers::path("/new"))
            .respond_with(ResponseTemplate::new(200).set_body_string("moved"))
            .mount(&server)
            .await;

        let client = init_client(&Config::default()).expect("client should build");
        let response = client
            .get(format!("{}/old", server.uri()))
            .send()
            .await
            .expect("request");
        assert_eq!(response.status().as_u16(), 200);
        assert!(response.url().path().ends_with("/new"));
    }
}
