//! REST API endpoint implementations.
//!
//! Each sub-module adds `async` methods to
//! [`QuoteClient`](crate::client::QuoteClient) via `impl` blocks.
//!
//! ```no_run
//! use options_chain::QuoteClient;
//!
//! # #[tokio::main]
//! # async fn main() -> options_chain::Result<()> {
//! let client = QuoteClient::new()?;
//! let prices = client.get_simple_price("ethereum", "usd").await?;
//! let eth = prices.price("ethereum", "usd")?;
//! # Ok(())
//! # }
//! ```
//!
//! | Module | Endpoints | Description |
//! |---|---|---|
//! | [`simple_price`] | 1 | Spot price by asset and currency |

pub mod simple_price;
