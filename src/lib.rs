//! # options-chain
//!
//! A single-asset (ETH) options chain shell: a calls/puts grid keyed by
//! expiry and strike, a client-side order-intent confirmation flow, and a
//! spot quote header fed by one asynchronous request.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use options_chain::{ChainConfig, ChainView, QuoteClient};
//! use options_chain::types::{STRIKE_CATALOG, Side};
//!
//! #[tokio::main]
//! async fn main() -> options_chain::Result<()> {
//!     let cfg = ChainConfig::from_env()?;
//!     let client = QuoteClient::from_config(&cfg)?;
//!     let mut view = ChainView::mount(Arc::new(client), &cfg);
//!
//!     view.quote_settled().await;
//!     view.select_expiry("2025-08-31");
//!     view.select_cell(Side::Bid, STRIKE_CATALOG[2].clone());
//!     let page = view.render(options_chain::view::today_local());
//!     println!("{}", page.header);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chain;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod gateway;
pub mod quote;
pub mod session;
pub mod types;
pub mod view;

/// Re-export the main client type at crate root for convenience.
pub use client::QuoteClient;
pub use config::ChainConfig;
/// Re-export the error type and Result alias.
pub use error::{ChainError, Result};
pub use session::ChainView;
