//! Order intent types — the transient (side, strike) selection and the
//! ticket handed to an [`OrderGateway`](crate::gateway::OrderGateway).

use serde::Serialize;

use crate::constants::INSTRUMENT_PREFIX;
use crate::types::catalog::{Strike, compact_expiry};
use crate::types::enums::Side;

/// A user-selected (side, strike) pair pending confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OrderIntent {
    pub side: Side,
    pub strike: Strike,
}

impl OrderIntent {
    pub fn new(side: Side, strike: Strike) -> Self {
        Self { side, strike }
    }
}

/// A confirmed intent together with the expiry selected at confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderTicket {
    pub intent: OrderIntent,
    /// ISO expiry value, absent when no expiry was selected.
    pub expiry: Option<&'static str>,
}

impl OrderTicket {
    /// Derived instrument identifier, see [`instrument_id`].
    pub fn instrument_id(&self) -> String {
        instrument_id(self.expiry, self.intent.side)
    }
}

/// Instrument identifier shown in the confirmation dialog.
///
/// `ETHUSD-<expiry without separators, uppercased> (<SIDE>)`; the expiry
/// segment is empty when no expiry is selected.
///
/// ```
/// use options_chain::types::{Side, instrument_id};
///
/// assert_eq!(instrument_id(Some("2025-08-31"), Side::Bid), "ETHUSD-20250831 (BID)");
/// assert_eq!(instrument_id(None, Side::Ask), "ETHUSD- (ASK)");
/// ```
pub fn instrument_id(expiry: Option<&str>, side: Side) -> String {
    let expiry = expiry.map(compact_expiry).unwrap_or_default();
    format!("{INSTRUMENT_PREFIX}-{expiry} ({})", side.as_upper())
}
