//! Constants for the options chain shell.
//!
//! Contains the quote source endpoint, the fixed underlying identifiers,
//! and the display placeholders shared by the view models and the TUI.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Quote source
// ---------------------------------------------------------------------------

/// Base URL of the CoinGecko REST API.
pub const QUOTE_API_BASE_URL: &str = "https://api.coingecko.com";

/// Path of the simple spot price endpoint.
pub const SIMPLE_PRICE_PATH: &str = "/api/v3/simple/price";

/// Quote source identifier of the underlying asset.
pub const QUOTE_ASSET_ID: &str = "ethereum";

/// Quote source identifier of the quote currency.
pub const QUOTE_CURRENCY_ID: &str = "usd";

/// Upper bound on a single quote request.
pub const DEFAULT_QUOTE_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Instrument naming
// ---------------------------------------------------------------------------

/// Ticker of the underlying as displayed in headers.
pub const UNDERLYING_TICKER: &str = "ETH";

/// Prefix of derived instrument identifiers (`ETHUSD-20250831 (BID)`).
pub const INSTRUMENT_PREFIX: &str = "ETHUSD";

/// Placeholder fair value until a pricing backend exists.
pub const FAIR_VALUE_PLACEHOLDER: f64 = 0.0;

// ---------------------------------------------------------------------------
// Display text
// ---------------------------------------------------------------------------

/// Header text while the quote request is in flight.
pub const LOADING_TEXT: &str = "LOADING...";

/// Label shown in place of an expiry when none is selected.
pub const EXPIRY_PLACEHOLDER: &str = "Expiry Date";

/// Column headers of the chain grid, calls on the left and puts on the right.
pub const GRID_COLUMNS: [&str; 11] = [
    "Size", "Bid", "Mark", "Ask", "Size", "Strike", "Size", "Bid", "Mark", "Ask", "Size",
];

/// Top-level navigation links (label, route).
pub const NAV_LINKS: [(&str, &str); 2] = [("Home", "/"), ("Option", "/option")];
