//! Shared test fixtures: canned quote sources and a one-shot HTTP server.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::{Notify, oneshot};

use options_chain::error::{ChainError, Result};
use options_chain::quote::QuoteSource;

// ===================================================================
// Quote sources
// ===================================================================

/// Answers immediately with a price, or fails.
pub struct CannedSource(pub Option<f64>);

#[async_trait]
impl QuoteSource for CannedSource {
    async fn spot_price(&self) -> Result<f64> {
        self.0
            .ok_or_else(|| ChainError::InvalidArgument("canned failure".into()))
    }
}

/// Answers after a delay.
pub struct SlowSource {
    pub delay: Duration,
    pub price: f64,
}

#[async_trait]
impl QuoteSource for SlowSource {
    async fn spot_price(&self) -> Result<f64> {
        tokio::time::sleep(self.delay).await;
        Ok(self.price)
    }
}

/// Answers once the test releases the gate.
pub struct GatedSource {
    pub gate: Arc<Notify>,
    pub price: f64,
}

#[async_trait]
impl QuoteSource for GatedSource {
    async fn spot_price(&self) -> Result<f64> {
        self.gate.notified().await;
        Ok(self.price)
    }
}

// ===================================================================
// HTTP
// ===================================================================

/// Serve exactly one HTTP response on a random local port.
///
/// Returns the base URL and a receiver yielding the raw request head.
pub async fn serve_once(
    status: &'static str,
    body: &'static str,
) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let (req_tx, req_rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.expect("accept");
        let mut buf = vec![0u8; 8192];
        let n = sock.read(&mut buf).await.expect("read request");
        let _ = req_tx.send(String::from_utf8_lossy(&buf[..n]).into_owned());

        let resp = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        sock.write_all(resp.as_bytes()).await.expect("write response");
        let _ = sock.shutdown().await;
    });

    (format!("http://{addr}"), req_rx)
}

/// A base URL nothing is listening on.
pub async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}
