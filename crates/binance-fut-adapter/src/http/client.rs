/*
[INPUT]:  API credentials, endpoint paths and request parameters
[OUTPUT]: Parsed JSON payloads or classified transport/API errors
[POS]:    HTTP layer - signed and unsigned requests against the futures REST API
[UPDATE]: When base URL, headers or error classification change
*/

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::{debug, error};
use url::Url;

use crate::http::error::{BinanceError, Result};
use crate::http::signature::{encode_pairs, RequestSigner};

/// Binance USDT-M futures testnet REST endpoint
pub const TESTNET_BASE_URL: &str = "https://testnet.binancefuture.com";

const API_KEY_HEADER: &str = "X-MBX-APIKEY";
/// Response bodies are truncated to this many chars in debug logs
const BODY_LOG_LIMIT: usize = 500;
/// Non-JSON bodies are truncated to this many chars in error messages
const BODY_SNIPPET_LIMIT: usize = 200;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: TESTNET_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// API key pair for request authentication
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &mask(&self.api_key))
            .field("api_secret", &"***REDACTED***")
            .finish()
    }
}

/// Client for the Binance USDT-M futures REST API
#[derive(Debug, Clone)]
pub struct BinanceClient {
    http_client: Client,
    base_url: Url,
    signer: RequestSigner,
}

impl BinanceClient {
    /// Create a client against the testnet with the default 10s timeout
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        if credentials.api_key.is_empty() || credentials.api_secret.is_empty() {
            return Err(BinanceError::validation(
                "credentials",
                "API key and secret must not be empty",
            ));
        }

        let base_url = Url::parse(&config.base_url).map_err(|err| {
            BinanceError::validation(
                "base_url",
                format!("Invalid base URL '{}': {err}", config.base_url),
            )
        })?;

        let mut api_key_value = HeaderValue::from_str(&credentials.api_key).map_err(|_| {
            BinanceError::validation(
                "api_key",
                "API key contains characters not valid in a header",
            )
        })?;
        api_key_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key_value);
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );

        let http_client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|err| BinanceError::Unexpected(format!("HTTP client build failed: {err}")))?;

        debug!(base_url = %base_url, "client initialised");

        Ok(Self {
            http_client,
            base_url,
            signer: RequestSigner::new(credentials.api_secret),
        })
    }

    /// Send a request and parse the response body as JSON.
    ///
    /// Parameters travel in the URL query string for every method; signed
    /// requests get `timestamp` and `signature` appended before encoding.
    /// A body that decodes to an object carrying a non-200 `code` field is
    /// an API rejection regardless of the HTTP status.
    pub(crate) async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        params: Vec<(String, String)>,
        signed: bool,
    ) -> Result<Value> {
        let query = if signed {
            self.signer.sign(&params).encode()
        } else {
            encode_pairs(&params)
        };

        let mut url = self.base_url.join(endpoint).map_err(|err| {
            BinanceError::validation("endpoint", format!("Invalid endpoint '{endpoint}': {err}"))
        })?;
        if !query.is_empty() {
            url.set_query(Some(&query));
        }

        debug!(method = %method, url = %url, "sending request");

        let response = self
            .http_client
            .request(method, url.clone())
            .send()
            .await
            .map_err(|err| map_transport_error(err, &url))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| map_transport_error(err, &url))?;

        debug!(status = %status, body = %truncate(&body, BODY_LOG_LIMIT), "response received");

        let data: Value = serde_json::from_str(&body).map_err(|_| {
            let snippet = truncate(&body, BODY_SNIPPET_LIMIT);
            error!(status = %status, "non-JSON response body");
            BinanceError::Api {
                code: -1,
                message: format!("Non-JSON response: {snippet}"),
            }
        })?;

        if let Some(code) = failure_code(&data) {
            let message = data
                .get("msg")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error")
                .to_string();
            error!(code, message = %message, "API rejected request");
            return Err(BinanceError::Api { code, message });
        }

        Ok(data)
    }
}

/// Extract the error code from a rejection body; `code: 200` and bodies
/// without a `code` field are successes
fn failure_code(data: &Value) -> Option<i64> {
    match data.get("code").and_then(Value::as_i64) {
        Some(200) | None => None,
        Some(code) => Some(code),
    }
}

fn map_transport_error(err: reqwest::Error, url: &Url) -> BinanceError {
    if err.is_timeout() {
        error!(url = %url, "request timed out");
        BinanceError::Timeout {
            url: url.to_string(),
        }
    } else {
        error!(error = %err, "network error");
        BinanceError::Connection(err.to_string())
    }
}

/// Truncate to a char boundary at most `limit` chars in
fn truncate(body: &str, limit: usize) -> &str {
    match body.char_indices().nth(limit) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

fn mask(value: &str) -> String {
    if value.chars().count() <= 8 {
        return "***".to_string();
    }
    let head: String = value.chars().take(4).collect();
    let tail: String = value.chars().skip(value.chars().count() - 4).collect();
    format!("{head}...{tail}")
}
