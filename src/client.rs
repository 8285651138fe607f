//! Core HTTP client for the spot quote source.
//!
//! The [`QuoteClient`] struct wraps [`reqwest::Client`] with JSON headers, a
//! bounded request timeout, and the fixed asset/currency pair the chain is
//! quoted in. Endpoint methods are added via `impl` blocks in [`crate::api`].

use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use crate::config::ChainConfig;
use crate::error::{ApiErrorBody, ChainError, Result};

/// HTTP client for the spot quote source.
///
/// # Example
///
/// ```no_run
/// use options_chain::client::QuoteClient;
///
/// # #[tokio::main]
/// # async fn main() -> options_chain::Result<()> {
/// let client = QuoteClient::new()?;
/// let price = client.get_spot_price().await?;
/// println!("ETH = {price}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct QuoteClient {
    http: reqwest::Client,
    /// Base URL for REST requests (defaults to [`QUOTE_API_BASE_URL`](crate::constants::QUOTE_API_BASE_URL)).
    base_url: String,
    asset_id: String,
    currency_id: String,
}

impl QuoteClient {
    /// Create a client with the default configuration.
    pub fn new() -> Result<Self> {
        Self::from_config(&ChainConfig::default())
    }

    /// Create a client pointing at a custom base URL, otherwise default.
    ///
    /// Useful for testing against a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::from_config(&ChainConfig::default().with_quote_base_url(base_url)?)
    }

    /// Create a client from an explicit configuration.
    pub fn from_config(cfg: &ChainConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .default_headers(Self::default_headers())
            .timeout(cfg.quote_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: cfg.quote_base_url.trim_end_matches('/').to_owned(),
            asset_id: cfg.asset_id.clone(),
            currency_id: cfg.currency_id.clone(),
        })
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Asset identifier quoted by [`get_spot_price`](Self::get_spot_price).
    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    /// Currency identifier quoted by [`get_spot_price`](Self::get_spot_price).
    pub fn currency_id(&self) -> &str {
        &self.currency_id
    }

    // -----------------------------------------------------------------------
    // Generic HTTP helpers
    // -----------------------------------------------------------------------

    /// Perform a GET request with query parameters and deserialize the JSON response.
    pub async fn get<R: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<R> {
        let bytes = self.get_bytes(path, query).await?;
        serde_json::from_slice(&bytes).map_err(ChainError::Json)
    }

    /// Perform a GET request and return the raw success body.
    pub async fn get_bytes(&self, path: &str, query: &[(&str, &str)]) -> Result<bytes::Bytes> {
        let url = self.url(path, query)?;
        tracing::debug!(%url, "GET");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Build the full URL from a path segment and query pairs.
    fn url(&self, path: &str, query: &[(&str, &str)]) -> Result<url::Url> {
        let joined = if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        };
        Ok(url::Url::parse_with_params(&joined, query)?)
    }

    /// Default headers applied to every request.
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Read a response, returning the body bytes or a `ChainError`.
    async fn handle_response(&self, resp: reqwest::Response) -> Result<bytes::Bytes> {
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if status.is_success() {
            Ok(bytes)
        } else {
            let body = String::from_utf8_lossy(&bytes);
            Err(Self::parse_error_body(status, &body))
        }
    }

    /// Try to parse the source's JSON error structure; fall back to a raw HTTP
    /// status error.
    pub(crate) fn parse_error_body(status: reqwest::StatusCode, body: &str) -> ChainError {
        if let Ok(api_err) = serde_json::from_str::<ApiErrorBody>(body) {
            if api_err.status.error_code.is_some() || api_err.status.error_message.is_some() {
                return ChainError::Api(api_err);
            }
        }
        ChainError::HttpStatus {
            status,
            body: body.to_owned(),
        }
    }
}
