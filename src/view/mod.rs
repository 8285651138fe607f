//! Render models for the chain page.
//!
//! These are plain data: the terminal UI draws them, tests assert on them.
//! Rendering is a pure function of [`ChainState`], [`QuoteState`], and the
//! date the page is rendered on.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::chain::ChainState;
use crate::chain::grid::STRIKE_COLUMN;
use crate::constants::{
    EXPIRY_PLACEHOLDER, FAIR_VALUE_PLACEHOLDER, GRID_COLUMNS, UNDERLYING_TICKER,
};
use crate::types::catalog::{EXPIRY_CATALOG, STRIKE_CATALOG, Strike};
use crate::types::enums::{OptionKind, Side};
use crate::types::order::instrument_id;
use crate::types::quote::QuoteState;

/// Calendar date in `YYYY-MM-DD` form.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's date in the local timezone.
pub fn today_local() -> NaiveDate {
    chrono::Local::now().date_naive()
}

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub title: String,
    /// `LOADING...`, `$<price>`, or empty.
    pub quote_text: String,
    pub today: String,
}

impl HeaderView {
    pub fn quote_line(&self) -> String {
        format!("{UNDERLYING_TICKER} Current Value: {}", self.quote_text)
    }

    pub fn date_line(&self) -> String {
        format!("Today Date: {}", self.today)
    }
}

impl fmt::Display for HeaderView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.quote_line())?;
        write!(f, "{}", self.date_line())
    }
}

pub fn render_header(quote: &QuoteState, today: NaiveDate) -> HeaderView {
    HeaderView {
        title: format!("Options({UNDERLYING_TICKER})"),
        quote_text: quote.display_text(),
        today: format_date(today),
    }
}

// ---------------------------------------------------------------------------
// Expiry selector
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpiryButton {
    pub label: &'static str,
    pub value: &'static str,
    pub selected: bool,
}

pub fn render_expiry_selector(state: &ChainState) -> Vec<ExpiryButton> {
    let selected = state.selected_expiry();
    EXPIRY_CATALOG
        .iter()
        .map(|e| ExpiryButton {
            label: e.label,
            value: e.value,
            selected: selected == Some(e.value),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// The options table: group headers, column headers, one row per strike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridView {
    /// `calls`, the selected expiry (or placeholder), `puts`.
    pub group_headers: [String; 3],
    pub columns: [&'static str; 11],
    pub rows: Vec<GridRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridRow {
    pub strike: Strike,
    /// Cell text per column. Only the strike column is populated.
    pub cells: [String; 11],
    /// Alternating background, set on odd rows.
    pub striped: bool,
}

pub fn render_grid(state: &ChainState) -> GridView {
    let expiry = state
        .selected_expiry()
        .unwrap_or(EXPIRY_PLACEHOLDER)
        .to_owned();

    let rows = STRIKE_CATALOG
        .iter()
        .enumerate()
        .map(|(i, strike)| {
            let mut cells: [String; 11] = Default::default();
            cells[STRIKE_COLUMN] = strike.label().to_owned();
            GridRow {
                strike: strike.clone(),
                cells,
                striped: i % 2 == 1,
            }
        })
        .collect();

    GridView {
        group_headers: [
            OptionKind::Call.group_label().to_owned(),
            expiry,
            OptionKind::Put.group_label().to_owned(),
        ],
        columns: GRID_COLUMNS,
        rows,
    }
}

// ---------------------------------------------------------------------------
// Confirmation dialog
// ---------------------------------------------------------------------------

/// A presentational numeric input. Its value is never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputField {
    pub label: &'static str,
    pub unit: Option<&'static str>,
    pub step: Option<&'static str>,
    pub min: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogView {
    /// e.g. `ETHUSD-20250831 (BID)`.
    pub instrument_id: String,
    /// Selected expiry value, or the placeholder.
    pub expiry_label: String,
    pub side: Side,
    pub strike: String,
    /// Always `0.00` until a pricing backend exists.
    pub fair_value: String,
    pub price_field: InputField,
    pub size_field: InputField,
}

/// The dialog, when it is open.
pub fn render_dialog(state: &ChainState) -> Option<DialogView> {
    if !state.is_dialog_open() {
        return None;
    }
    let order = state.selected_order()?;
    let expiry = state.selected_expiry();

    Some(DialogView {
        instrument_id: instrument_id(expiry, order.side),
        expiry_label: expiry.unwrap_or(EXPIRY_PLACEHOLDER).to_owned(),
        side: order.side,
        strike: order.strike.label().to_owned(),
        fair_value: format!("{FAIR_VALUE_PLACEHOLDER:.2}"),
        price_field: InputField {
            label: "Price",
            unit: Some(UNDERLYING_TICKER),
            step: Some("0.001"),
            min: "0",
        },
        size_field: InputField {
            label: "Size",
            unit: None,
            step: None,
            min: "1",
        },
    })
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub header: HeaderView,
    pub expiries: Vec<ExpiryButton>,
    pub grid: GridView,
    pub dialog: Option<DialogView>,
}

pub fn render_page(state: &ChainState, quote: &QuoteState, today: NaiveDate) -> PageView {
    PageView {
        header: render_header(quote, today),
        expiries: render_expiry_selector(state),
        grid: render_grid(state),
        dialog: render_dialog(state),
    }
}
