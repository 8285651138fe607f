//! Quote fetch lifecycle for the chain header.
//!
//! [`refresh_quote`] performs one bounded request against a [`QuoteSource`]
//! and folds every failure into [`QuoteState::Unavailable`]. [`QuoteFetcher`]
//! runs it once on a Tokio task bound to a [`CancellationToken`], so a view
//! torn down before the request settles never receives the result.
//!
//! ```text
//!   ChainView::mount ──► QuoteFetcher::spawn ──► tokio task
//!                              │                    │ select!
//!                         QuoteHandle ◄── watch ────┤  refresh_quote(source)
//!                   (drop = cancel token)           └  token.cancelled()
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::{ChainError, Result};
use crate::types::quote::QuoteState;

/// Anything that can produce the spot price of the chain's underlying.
///
/// Implemented by [`QuoteClient`](crate::client::QuoteClient); tests plug in
/// canned sources.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn spot_price(&self) -> Result<f64>;
}

/// Issue one request to `source`, bounded by `timeout`.
///
/// Never fails: errors are logged and reported as [`QuoteState::Unavailable`].
pub async fn refresh_quote<S>(source: &S, timeout: Duration) -> QuoteState
where
    S: QuoteSource + ?Sized,
{
    let res = match tokio::time::timeout(timeout, source.spot_price()).await {
        Ok(res) => res,
        Err(_) => Err(ChainError::Timeout(timeout)),
    };

    match res {
        Ok(price) if price.is_finite() => {
            info!(price, "spot quote settled");
            QuoteState::Available(price)
        }
        Ok(price) => {
            warn!(price, "spot quote unavailable: non-finite price");
            QuoteState::Unavailable
        }
        Err(e) => {
            warn!(error = %e, "spot quote unavailable");
            QuoteState::Unavailable
        }
    }
}

// ---------------------------------------------------------------------------
// Fetcher task
// ---------------------------------------------------------------------------

/// Spawns the one-shot quote refresh of a view.
pub struct QuoteFetcher;

impl QuoteFetcher {
    /// Start the refresh on the current Tokio runtime.
    ///
    /// The returned handle reads [`QuoteState::Pending`] until the request
    /// settles. Cancelling `token` (or dropping the handle) discards any
    /// result that has not been published yet. The handle owns a child of
    /// `token`, so dropping it never cancels the caller's token.
    pub fn spawn(
        source: Arc<dyn QuoteSource>,
        timeout: Duration,
        token: CancellationToken,
    ) -> QuoteHandle {
        let (tx, rx) = watch::channel(QuoteState::Pending);
        let token = token.child_token();
        let task_token = token.clone();

        let task = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = task_token.cancelled() => {
                    debug!("quote refresh cancelled before settling");
                }
                state = refresh_quote(source.as_ref(), timeout) => {
                    if task_token.is_cancelled() {
                        debug!(?state, "discarding quote for torn-down view");
                        return;
                    }
                    // Receiver gone means the view is gone; nothing to write to.
                    let _ = tx.send(state);
                }
            }
        });

        QuoteHandle { rx, token, task }
    }
}

/// View-side end of a running quote refresh.
///
/// Dropping the handle cancels the refresh.
#[derive(Debug)]
pub struct QuoteHandle {
    rx: watch::Receiver<QuoteState>,
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl QuoteHandle {
    /// Current quote state.
    pub fn state(&self) -> QuoteState {
        *self.rx.borrow()
    }

    /// A receiver notified when the quote settles.
    pub fn subscribe(&self) -> watch::Receiver<QuoteState> {
        self.rx.clone()
    }

    /// Wait until the quote settles or the refresh is cancelled, then return
    /// the current state.
    pub async fn settled(&mut self) -> QuoteState {
        let token = self.token.clone();
        let rx = &mut self.rx;
        tokio::select! {
            _ = rx.wait_for(QuoteState::is_settled) => {}
            _ = token.cancelled() => {}
        }
        *self.rx.borrow()
    }

    /// Cancel the refresh. A result not yet published is discarded.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Whether the background task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for QuoteHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
