//! One mounted chain view: interaction state plus its quote refresh.
//!
//! [`ChainView::mount`] creates fresh state and starts the single quote
//! request; dropping the view (or calling [`ChainView::unmount`]) cancels a
//! request still in flight. The quote task only ever writes the quote
//! channel, never [`ChainState`].

use std::sync::Arc;

use chrono::NaiveDate;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::chain::{ChainState, Transition};
use crate::config::ChainConfig;
use crate::quote::{QuoteFetcher, QuoteHandle, QuoteSource};
use crate::types::catalog::Strike;
use crate::types::enums::Side;
use crate::types::order::OrderTicket;
use crate::types::quote::QuoteState;
use crate::view::{PageView, render_page};

#[derive(Debug)]
pub struct ChainView {
    state: ChainState,
    quote: QuoteHandle,
}

impl ChainView {
    /// Mount a view and start its quote refresh. Must run inside a Tokio runtime.
    pub fn mount(source: Arc<dyn QuoteSource>, cfg: &ChainConfig) -> Self {
        Self::mount_with_token(source, cfg, CancellationToken::new())
    }

    /// Like [`mount`](Self::mount), with the refresh bound to `token`
    /// (e.g. a child of an application shutdown token).
    pub fn mount_with_token(
        source: Arc<dyn QuoteSource>,
        cfg: &ChainConfig,
        token: CancellationToken,
    ) -> Self {
        debug!(timeout = ?cfg.quote_timeout, "mounting chain view");
        Self {
            state: ChainState::new(),
            quote: QuoteFetcher::spawn(source, cfg.quote_timeout, token),
        }
    }

    pub fn state(&self) -> &ChainState {
        &self.state
    }

    pub fn quote_state(&self) -> QuoteState {
        self.quote.state()
    }

    pub fn quote(&self) -> &QuoteHandle {
        &self.quote
    }

    /// Wait for the quote refresh to settle (or be cancelled).
    pub async fn quote_settled(&mut self) -> QuoteState {
        self.quote.settled().await
    }

    pub fn select_expiry(&mut self, value: &str) -> Transition {
        self.state.select_expiry(value)
    }

    pub fn select_cell(&mut self, side: Side, strike: Strike) -> Transition {
        self.state.select_cell(side, strike)
    }

    pub fn confirm(&mut self) -> Option<OrderTicket> {
        self.state.confirm()
    }

    pub fn cancel(&mut self) -> Transition {
        self.state.cancel()
    }

    pub fn render(&self, today: NaiveDate) -> PageView {
        render_page(&self.state, &self.quote.state(), today)
    }

    /// Tear the view down, discarding an unsettled quote.
    pub fn unmount(self) {
        debug!("unmounting chain view");
        self.quote.cancel();
    }
}
