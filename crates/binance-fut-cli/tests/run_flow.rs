/*
[INPUT]:  Parsed CLI arguments and mock exchange responses
[OUTPUT]: Test results for the end-to-end run flow
[POS]:    Integration tests - CLI run flow against a mock exchange
[UPDATE]: When flags or the run sequence change
*/

use clap::Parser;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use binance_fut_adapter::BinanceError;
use binance_fut_cli::{run, Cli};

fn base_args(server_uri: &str) -> Vec<String> {
    [
        "binance-fut-cli",
        "--symbol",
        "BTCUSDT",
        "--side",
        "BUY",
        "--type",
        "MARKET",
        "--quantity",
        "0.001",
        "--api-key",
        "test-api-key",
        "--api-secret",
        "test-api-secret",
        "--base-url",
        server_uri,
    ]
    .iter()
    .map(|arg| arg.to_string())
    .collect()
}

fn filled_ack() -> serde_json::Value {
    json!({
        "orderId": 4_611_875_134i64,
        "symbol": "BTCUSDT",
        "status": "FILLED",
        "side": "BUY",
        "type": "MARKET",
        "origQty": "0.001",
        "executedQty": "0.001",
        "avgPrice": "96421.10",
        "updateTime": 1_736_500_000_123i64,
    })
}

#[tokio::test]
async fn test_run_places_market_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(filled_ack()))
        .expect(1)
        .mount(&server)
        .await;

    let args = Cli::parse_from(base_args(&server.uri()));
    run(&args).await.unwrap();
}

#[tokio::test]
async fn test_run_surfaces_api_rejection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": -2010,
            "msg": "Account has insufficient balance for requested action.",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let args = Cli::parse_from(base_args(&server.uri()));
    let err = run(&args).await.unwrap_err();

    assert!(matches!(err, BinanceError::Api { code: -2010, .. }));
}

#[tokio::test]
async fn test_check_probes_exchange_before_ordering() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fapi/v1/exchangeInfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "timezone": "UTC",
            "serverTime": 1_736_500_000_000i64,
            "symbols": [{"symbol": "BTCUSDT", "status": "TRADING"}],
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(filled_ack()))
        .expect(1)
        .mount(&server)
        .await;

    let mut argv = base_args(&server.uri());
    argv.push("--check".to_string());
    let args = Cli::parse_from(argv);
    run(&args).await.unwrap();
}

#[tokio::test]
async fn test_validation_failure_never_hits_network() {
    let server = MockServer::start().await;

    let mut argv = base_args(&server.uri());
    let quantity_index = argv.iter().position(|arg| arg == "0.001").unwrap();
    argv[quantity_index] = "abc".to_string();

    let args = Cli::parse_from(argv);
    let err = run(&args).await.unwrap_err();

    assert!(matches!(err, BinanceError::Validation { field: "quantity", .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_api_key_flag_overrides_environment() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .and(header("X-MBX-APIKEY", "flag-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(filled_ack()))
        .expect(1)
        .mount(&server)
        .await;

    unsafe {
        std::env::set_var("BINANCE_API_KEY", "env-key");
        std::env::set_var("BINANCE_API_SECRET", "env-secret");
    }

    let mut argv = base_args(&server.uri());
    let key_index = argv.iter().position(|arg| arg == "test-api-key").unwrap();
    argv[key_index] = "flag-key".to_string();

    let args = Cli::parse_from(argv);
    let result = run(&args).await;

    unsafe {
        std::env::remove_var("BINANCE_API_KEY");
        std::env::remove_var("BINANCE_API_SECRET");
    }

    result.unwrap();
}
