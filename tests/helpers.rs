// Shared test helpers for mock sites and clients.
//
// This module provides common utilities used across multiple test files to reduce duplication.

#![allow(dead_code)] // Each test file uses a different subset

use std::time::Duration;

use link_audit::initialization::init_client;
use link_audit::Config;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds an HTML page whose `<main>` holds exactly `chars` characters of text.
pub fn page_with_main_text(chars: usize) -> String {
    format!(
        "<html><head><title>Test page</title></head><body><nav>Home</nav><main>{}</main></body></html>",
        "a".repeat(chars)
    )
}

/// Config with a one-second fetch timeout so timeout tests stay fast.
pub fn fast_config() -> Config {
    Config {
        timeout_seconds: 1,
        ..Default::default()
    }
}

pub fn client_for(config: &Config) -> reqwest::Client {
    init_client(config).expect("Failed to build HTTP client")
}

/// Starts a mock site with three pages:
/// - `/good`: 200 with 500 characters of main content
/// - `/missing`: 404
/// - `/slow`: 200 after 3 seconds (past the `fast_config` timeout)
pub async fn start_mock_site() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/good"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string(page_with_main_text(500)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(page_with_main_text(500))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    server
}

/// Newline-separated good, missing and slow URLs for `server`.
pub fn mock_site_input(server: &MockServer) -> String {
    format!("{0}/good\n{0}/missing\n{0}/slow\n", server.uri())
}
