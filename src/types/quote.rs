//! Spot quote types — the simple price payload and the header's quote state.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use crate::constants::LOADING_TEXT;
use crate::error::{ChainError, Result};

// ---------------------------------------------------------------------------
// Simple price response
// ---------------------------------------------------------------------------

/// Response from `GET /api/v3/simple/price`.
///
/// The body is a map of asset id → currency id → price.
/// Example: `{ "ethereum": { "usd": 3123.45 } }`
///
/// Prices are kept as raw JSON values so that a non-numeric field surfaces
/// as [`ChainError::MalformedQuote`] rather than failing the whole decode.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct SimplePriceResponse(pub HashMap<String, HashMap<String, serde_json::Value>>);

impl SimplePriceResponse {
    /// Decode a raw response body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(ChainError::Json)
    }

    /// The price of `asset` in `currency`, if present and a finite number.
    pub fn price(&self, asset: &str, currency: &str) -> Result<f64> {
        let malformed = |reason: &str| ChainError::MalformedQuote {
            asset: asset.to_owned(),
            currency: currency.to_owned(),
            reason: reason.to_owned(),
        };

        let value = self
            .0
            .get(asset)
            .ok_or_else(|| malformed("asset key missing"))?
            .get(currency)
            .ok_or_else(|| malformed("currency key missing"))?;

        match value.as_f64() {
            Some(p) if p.is_finite() => Ok(p),
            Some(_) => Err(malformed("price is not finite")),
            None => Err(malformed("price is not a number")),
        }
    }
}

// ---------------------------------------------------------------------------
// Quote state
// ---------------------------------------------------------------------------

/// Lifecycle of the header quote.
///
/// Moves only `Pending → Available | Unavailable` within one fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum QuoteState {
    /// The request is in flight.
    #[default]
    Pending,
    /// The source answered with a price.
    Available(f64),
    /// The request failed in any way. Rendered blank.
    Unavailable,
}

impl QuoteState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Header text: `LOADING...`, `$<price>`, or empty.
    pub fn display_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for QuoteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str(LOADING_TEXT),
            Self::Available(p) => write!(f, "${p}"),
            Self::Unavailable => Ok(()),
        }
    }
}
