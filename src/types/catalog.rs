//! Fixed expiry and strike catalogs.
//!
//! Both catalogs are closed sets: every selection entering
//! [`ChainState`](crate::chain::ChainState) is checked for membership here.

use std::borrow::Cow;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Expiries
// ---------------------------------------------------------------------------

/// One offered expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ExpiryOption {
    /// Button label (e.g. `31 AUG 25`).
    pub label: &'static str,
    /// Canonical ISO calendar date (e.g. `2025-08-31`).
    pub value: &'static str,
}

impl ExpiryOption {
    /// The expiry as a calendar date.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.value, "%Y-%m-%d").ok()
    }
}

/// Expiries offered by the chain, in display order.
pub static EXPIRY_CATALOG: [ExpiryOption; 3] = [
    ExpiryOption {
        label: "31 JUL 25",
        value: "2025-07-31",
    },
    ExpiryOption {
        label: "31 AUG 25",
        value: "2025-08-31",
    },
    ExpiryOption {
        label: "30 SEP 25",
        value: "2025-09-30",
    },
];

/// Look up a catalog expiry by its ISO value.
pub fn find_expiry(value: &str) -> Option<&'static ExpiryOption> {
    EXPIRY_CATALOG.iter().find(|e| e.value == value)
}

/// Strip `-` separators and uppercase an expiry value.
pub fn compact_expiry(value: &str) -> String {
    value.replace('-', "").to_uppercase()
}

// ---------------------------------------------------------------------------
// Strikes
// ---------------------------------------------------------------------------

/// A strike price level, kept as its formatted label (`2,900`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Strike(Cow<'static, str>);

impl Strike {
    /// A strike backed by a static label.
    pub const fn from_static(label: &'static str) -> Self {
        Self(Cow::Borrowed(label))
    }

    /// A strike from an arbitrary label. Not necessarily in the catalog.
    pub fn new(label: impl Into<String>) -> Self {
        Self(Cow::Owned(label.into()))
    }

    /// The formatted label.
    pub fn label(&self) -> &str {
        &self.0
    }

    /// The numeric level, with thousands separators removed.
    pub fn price(&self) -> Option<f64> {
        self.0.replace(',', "").parse().ok()
    }

    /// Whether this strike is one of [`STRIKE_CATALOG`].
    pub fn is_listed(&self) -> bool {
        STRIKE_CATALOG.contains(self)
    }
}

impl fmt::Display for Strike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strikes rendered in the grid, lowest first.
pub static STRIKE_CATALOG: [Strike; 6] = [
    Strike::from_static("2,700"),
    Strike::from_static("2,800"),
    Strike::from_static("2,900"),
    Strike::from_static("3,000"),
    Strike::from_static("3,100"),
    Strike::from_static("3,200"),
];
