//! Chain interaction state machine.
//!
//! [`ChainState`] owns the selected expiry, the live order intent, and the
//! confirmation dialog flag. Every transition is a synchronous `&mut self`
//! method returning a [`Transition`], so the whole machine is testable
//! without a rendering surface.
//!
//! ```text
//!              select_cell(side, strike)
//!   Browsing ─────────────────────────────► Confirming{intent}
//!      ▲   ◄──────── confirm() / cancel() ───────┘   │
//!      │                                             │ select_cell: replace intent
//!      └─ select_expiry(v): any state, dialog untouched
//! ```
//!
//! Cancel clears the intent just like confirm, so a closed dialog never
//! leaves a stale selection behind.

pub mod grid;

use chrono::NaiveDate;
use tracing::debug;

use crate::types::catalog::{ExpiryOption, Strike, find_expiry};
use crate::types::enums::Side;
use crate::types::order::{OrderIntent, OrderTicket};

/// Outcome of a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// State was updated (possibly to the same value).
    Applied,
    /// Precondition failed; state is unchanged.
    Rejected(Rejection),
}

impl Transition {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Why a transition was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The expiry is not in [`EXPIRY_CATALOG`](crate::types::EXPIRY_CATALOG).
    UnknownExpiry,
    /// The strike is not in [`STRIKE_CATALOG`](crate::types::STRIKE_CATALOG).
    UnknownStrike,
    /// Confirm or cancel without an open dialog.
    DialogClosed,
}

/// Interaction state of one chain view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainState {
    selected_expiry: Option<&'static ExpiryOption>,
    selected_order: Option<OrderIntent>,
    confirm_dialog_open: bool,
}

impl ChainState {
    /// Fresh state: nothing selected, dialog closed.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// ISO value of the selected expiry.
    pub fn selected_expiry(&self) -> Option<&'static str> {
        self.selected_expiry.map(|e| e.value)
    }

    /// The selected catalog entry.
    pub fn selected_expiry_option(&self) -> Option<&'static ExpiryOption> {
        self.selected_expiry
    }

    pub fn selected_order(&self) -> Option<&OrderIntent> {
        self.selected_order.as_ref()
    }

    pub fn is_dialog_open(&self) -> bool {
        self.confirm_dialog_open
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// Select an expiry by ISO value. Unknown values are rejected.
    ///
    /// Leaves the dialog and intent as they are.
    pub fn select_expiry(&mut self, value: &str) -> Transition {
        let Some(option) = find_expiry(value) else {
            debug!(value, "rejecting unknown expiry");
            return Transition::Rejected(Rejection::UnknownExpiry);
        };
        debug!(expiry = option.value, "expiry selected");
        self.selected_expiry = Some(option);
        Transition::Applied
    }

    /// Select an expiry by calendar date.
    pub fn select_expiry_date(&mut self, date: NaiveDate) -> Transition {
        self.select_expiry(&date.format("%Y-%m-%d").to_string())
    }

    /// Select a grid cell: sets the intent and opens the dialog.
    ///
    /// No expiry is required. A cell selected while the dialog is open
    /// replaces the current intent.
    pub fn select_cell(&mut self, side: Side, strike: Strike) -> Transition {
        if !strike.is_listed() {
            debug!(%strike, "rejecting unknown strike");
            return Transition::Rejected(Rejection::UnknownStrike);
        }
        debug!(%side, %strike, "cell selected");
        self.selected_order = Some(OrderIntent::new(side, strike));
        self.confirm_dialog_open = true;
        Transition::Applied
    }

    /// Confirm the open dialog, returning the ticket it confirmed.
    ///
    /// Closes the dialog and clears the intent. Nothing is submitted here;
    /// pass the ticket to an [`OrderGateway`](crate::gateway::OrderGateway)
    /// to do that. Returns `None` when no dialog is open.
    pub fn confirm(&mut self) -> Option<OrderTicket> {
        if !self.confirm_dialog_open {
            debug!("confirm ignored: dialog closed");
            return None;
        }
        self.confirm_dialog_open = false;
        let intent = self.selected_order.take()?;
        debug!(side = %intent.side, strike = %intent.strike, "order intent confirmed");
        Some(OrderTicket {
            intent,
            expiry: self.selected_expiry(),
        })
    }

    /// Dismiss the open dialog and clear the intent.
    pub fn cancel(&mut self) -> Transition {
        if !self.confirm_dialog_open {
            debug!("cancel ignored: dialog closed");
            return Transition::Rejected(Rejection::DialogClosed);
        }
        self.confirm_dialog_open = false;
        self.selected_order = None;
        debug!("order intent cancelled");
        Transition::Applied
    }
}
