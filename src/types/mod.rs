//! Domain types for the options chain shell.
//!
//! ## Organization
//!
//! - [`enums`] — Side and option kind
//! - [`catalog`] — Fixed expiry and strike catalogs
//! - [`order`] — Order intents, tickets, and instrument identifiers
//! - [`quote`] — Simple price payload and header quote state
//!
//! Everything is re-exported at the module root.

pub mod catalog;
pub mod enums;
pub mod order;
pub mod quote;

pub use catalog::*;
pub use enums::*;
pub use order::*;
pub use quote::*;
