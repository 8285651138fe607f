//! Shared enum types for chain cells and order intents.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

/// Bid (buy-side) or ask (sell-side) intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Bid,
    Ask,
}

impl Side {
    /// Both sides, bid first.
    pub const ALL: [Side; 2] = [Side::Bid, Side::Ask];

    /// Uppercase label used in instrument identifiers (`BID` / `ASK`).
    pub fn as_upper(self) -> &'static str {
        match self {
            Self::Bid => "BID",
            Self::Ask => "ASK",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_upper())
    }
}

// ---------------------------------------------------------------------------
// Option Kind
// ---------------------------------------------------------------------------

/// Which half of the chain grid a cell belongs to.
///
/// Layout only: an [`OrderIntent`](crate::types::OrderIntent) does not carry
/// the option kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    /// Group header text of this half of the grid.
    pub fn group_label(self) -> &'static str {
        match self {
            Self::Call => "calls",
            Self::Put => "puts",
        }
    }
}
