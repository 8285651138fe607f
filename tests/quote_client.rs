//! HTTP client against a local one-shot server.
//!
//! Covers the outbound request shape, the simple price payload, and how
//! every kind of bad response maps onto `ChainError` and then onto
//! `QuoteState::Unavailable`.

mod common;

use std::sync::Mutex;
use std::time::Duration;

use common::{dead_url, serve_once};
use options_chain::QuoteClient;
use options_chain::config::{ChainConfig, ENV_QUOTE_TIMEOUT_SECS, ENV_QUOTE_URL};
use options_chain::error::ChainError;
use options_chain::quote::refresh_quote;
use options_chain::types::{QuoteState, SimplePriceResponse};

const OK: &str = "200 OK";

// ===================================================================
// Request shape
// ===================================================================

#[tokio::test]
async fn requests_simple_price_for_eth_in_usd() {
    let (base, req) = serve_once(OK, r#"{"ethereum":{"usd":3123.45}}"#).await;
    let client = QuoteClient::with_base_url(base).unwrap();

    let price = client.get_spot_price().await.expect("spot price");
    assert_eq!(price, 3123.45);

    let head = req.await.unwrap();
    let request_line = head.lines().next().unwrap();
    assert!(
        request_line.starts_with("GET /api/v3/simple/price?ids=ethereum&vs_currencies=usd "),
        "unexpected request line: {request_line}"
    );
    assert!(head.to_ascii_lowercase().contains("accept: application/json"));
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_ignored() {
    let (base, req) = serve_once(OK, r#"{"ethereum":{"usd":1}}"#).await;
    let client = QuoteClient::with_base_url(format!("{base}/")).unwrap();
    assert_eq!(client.get_spot_price().await.unwrap(), 1.0);
    assert!(req.await.unwrap().starts_with("GET /api/v3/simple/price?"));
}

#[tokio::test]
async fn multi_asset_response_decodes() {
    let (base, _req) = serve_once(
        OK,
        r#"{"ethereum":{"usd":3000.5,"eur":2800},"bitcoin":{"usd":60000}}"#,
    )
    .await;
    let client = QuoteClient::with_base_url(base).unwrap();
    let resp = client
        .get_simple_price("ethereum,bitcoin", "usd,eur")
        .await
        .unwrap();
    assert_eq!(resp.price("ethereum", "eur").unwrap(), 2800.0);
    assert_eq!(resp.price("bitcoin", "usd").unwrap(), 60000.0);
}

// ===================================================================
// Error mapping
// ===================================================================

#[tokio::test]
async fn rate_limit_body_is_api_error() {
    let (base, _req) = serve_once(
        "429 Too Many Requests",
        r#"{"status":{"error_code":429,"error_message":"You've exceeded the Rate Limit."}}"#,
    )
    .await;
    let client = QuoteClient::with_base_url(base).unwrap();
    match client.get_spot_price().await {
        Err(ChainError::Api(body)) => {
            assert_eq!(body.status.error_code, Some(429));
            assert!(body.to_string().starts_with("[429]"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn plain_server_error_is_http_status() {
    let (base, _req) = serve_once("503 Service Unavailable", "upstream down").await;
    let client = QuoteClient::with_base_url(base).unwrap();
    match client.get_spot_price().await {
        Err(ChainError::HttpStatus { status, body }) => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(body, "upstream down");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn wrong_shape_is_json_error() {
    let (base, _req) = serve_once(OK, r#"[1,2,3]"#).await;
    let client = QuoteClient::with_base_url(base).unwrap();
    assert!(matches!(client.get_spot_price().await, Err(ChainError::Json(_))));
}

#[tokio::test]
async fn string_price_is_malformed_quote() {
    let (base, _req) = serve_once(OK, r#"{"ethereum":{"usd":"3123.45"}}"#).await;
    let client = QuoteClient::with_base_url(base).unwrap();
    assert!(matches!(
        client.get_spot_price().await,
        Err(ChainError::MalformedQuote { .. })
    ));
}

#[tokio::test]
async fn missing_currency_is_malformed_quote() {
    let (base, _req) = serve_once(OK, r#"{"ethereum":{}}"#).await;
    let client = QuoteClient::with_base_url(base).unwrap();
    assert!(matches!(
        client.get_spot_price().await,
        Err(ChainError::MalformedQuote { .. })
    ));
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    let client = QuoteClient::with_base_url(dead_url().await).unwrap();
    assert!(matches!(client.get_spot_price().await, Err(ChainError::Http(_))));
}

#[tokio::test]
async fn every_failure_renders_blank() {
    let bodies = [
        ("500 Internal Server Error", "{}"),
        (OK, "not json"),
        (OK, r#"{"ethereum":{"usd":null}}"#),
        (OK, r#"{"bitcoin":{"usd":1}}"#),
    ];
    for (status, body) in bodies {
        let (base, _req) = serve_once(status, body).await;
        let client = QuoteClient::with_base_url(base).unwrap();
        let state = refresh_quote(&client, Duration::from_secs(5)).await;
        assert_eq!(state, QuoteState::Unavailable, "{status} {body}");
        assert_eq!(state.display_text(), "");
    }
}

// ===================================================================
// Payload and config
// ===================================================================

#[test]
fn simple_price_payload_parses() {
    let resp = SimplePriceResponse::from_slice(br#"{"ethereum":{"usd":3123.45}}"#).unwrap();
    assert_eq!(resp.price("ethereum", "usd").unwrap(), 3123.45);
    assert!(resp.price("ethereum", "eur").is_err());
    assert!(resp.price("bitcoin", "usd").is_err());
}

#[test]
fn client_takes_identifiers_from_config() {
    let cfg = ChainConfig {
        asset_id: "bitcoin".into(),
        currency_id: "eur".into(),
        ..ChainConfig::default()
    };
    let client = QuoteClient::from_config(&cfg).unwrap();
    assert_eq!(client.asset_id(), "bitcoin");
    assert_eq!(client.currency_id(), "eur");
    assert_eq!(client.base_url(), "https://api.coingecko.com");
}

#[test]
fn config_builders_validate() {
    assert!(ChainConfig::default().with_quote_base_url("not a url").is_err());
    assert!(ChainConfig::default().with_quote_timeout(Duration::ZERO).is_err());

    let cfg = ChainConfig::default()
        .with_quote_base_url("http://127.0.0.1:9000/")
        .unwrap()
        .with_quote_timeout(Duration::from_secs(2))
        .unwrap();
    assert_eq!(cfg.quote_base_url, "http://127.0.0.1:9000");
    assert_eq!(cfg.quote_timeout, Duration::from_secs(2));
}

// ===================================================================
// Environment overrides
// ===================================================================

/// Process environment is shared by every test thread.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn with_env(url: Option<&str>, timeout: Option<&str>, f: impl FnOnce()) {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    // SAFETY: every test touching these variables holds ENV_LOCK.
    unsafe {
        match url {
            Some(v) => std::env::set_var(ENV_QUOTE_URL, v),
            None => std::env::remove_var(ENV_QUOTE_URL),
        }
        match timeout {
            Some(v) => std::env::set_var(ENV_QUOTE_TIMEOUT_SECS, v),
            None => std::env::remove_var(ENV_QUOTE_TIMEOUT_SECS),
        }
    }
    f();
    unsafe {
        std::env::remove_var(ENV_QUOTE_URL);
        std::env::remove_var(ENV_QUOTE_TIMEOUT_SECS);
    }
}

#[test]
fn env_unset_yields_defaults() {
    with_env(None, None, || {
        assert_eq!(ChainConfig::from_env().unwrap(), ChainConfig::default());
    });
}

#[test]
fn env_overrides_are_applied() {
    with_env(Some("http://127.0.0.1:9000/"), Some(" 3 "), || {
        let cfg = ChainConfig::from_env().unwrap();
        assert_eq!(cfg.quote_base_url, "http://127.0.0.1:9000");
        assert_eq!(cfg.quote_timeout, Duration::from_secs(3));
        assert_eq!(cfg.asset_id, "ethereum");
    });
}

#[test]
fn env_bad_url_is_rejected() {
    with_env(Some("not a url"), None, || {
        assert!(matches!(ChainConfig::from_env(), Err(ChainError::Url(_))));
    });
}

#[test]
fn env_non_numeric_timeout_is_invalid_argument() {
    with_env(None, Some("abc"), || {
        let err = ChainConfig::from_env().unwrap_err();
        assert!(matches!(err, ChainError::InvalidArgument(_)), "{err:?}");
        assert!(err.to_string().contains(ENV_QUOTE_TIMEOUT_SECS));
    });
}

#[test]
fn env_zero_timeout_is_invalid_argument() {
    with_env(None, Some("0"), || {
        let err = ChainConfig::from_env().unwrap_err();
        assert!(matches!(err, ChainError::InvalidArgument(_)), "{err:?}");
    });
}
