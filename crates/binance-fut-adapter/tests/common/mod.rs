/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for binance-fut-adapter tests

use std::time::Duration;

use wiremock::MockServer;

use binance_fut_adapter::{BinanceClient, ClientConfig, Credentials};

/// Setup a mock HTTP server for testing.
///
/// Built via `MockServer::builder()` to get a dedicated (non-pooled) server:
/// pooled servers keep listening after drop, which breaks tests that rely on
/// dropping the server to make its port unreachable.
pub async fn setup_mock_server() -> MockServer {
    MockServer::builder().start().await
}

/// Deterministic test credentials
pub fn test_credentials() -> Credentials {
    Credentials::new("test-api-key", "test-api-secret")
}

/// Client pointed at the mock server with the default timeout
pub fn test_client(server: &MockServer) -> BinanceClient {
    test_client_with_timeout(server, Duration::from_secs(10))
}

#[allow(dead_code)]
pub fn test_client_with_timeout(server: &MockServer, timeout: Duration) -> BinanceClient {
    let config = ClientConfig {
        base_url: server.uri(),
        timeout,
    };
    BinanceClient::with_config(test_credentials(), config).unwrap()
}
