//! Order submission seam.
//!
//! The chain shell has no order backend. [`OrderGateway`] is the interface a
//! backend would implement; [`UnimplementedGateway`] is the only
//! implementation shipped and refuses every ticket.

use async_trait::async_trait;
use tracing::warn;

use crate::error::{ChainError, Result};
use crate::types::order::OrderTicket;

#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Submit a confirmed ticket.
    async fn submit_order(&self, ticket: &OrderTicket) -> Result<()>;
}

/// Gateway used until order submission exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedGateway;

#[async_trait]
impl OrderGateway for UnimplementedGateway {
    async fn submit_order(&self, ticket: &OrderTicket) -> Result<()> {
        warn!(
            instrument = %ticket.instrument_id(),
            strike = %ticket.intent.strike,
            "order submission is not implemented; ticket dropped"
        );
        Err(ChainError::NotImplemented("order submission"))
    }
}
