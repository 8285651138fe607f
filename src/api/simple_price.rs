//! Simple price endpoint — spot price of one asset in one currency.

use async_trait::async_trait;

use crate::client::QuoteClient;
use crate::constants::SIMPLE_PRICE_PATH;
use crate::error::Result;
use crate::quote::QuoteSource;
use crate::types::quote::SimplePriceResponse;

impl QuoteClient {
    /// Retrieve spot prices for the given asset ids in the given currencies.
    ///
    /// Both arguments are comma-separated lists as accepted by the source.
    ///
    /// **Endpoint:** `GET /api/v3/simple/price?ids=..&vs_currencies=..`
    pub async fn get_simple_price(
        &self,
        ids: &str,
        vs_currencies: &str,
    ) -> Result<SimplePriceResponse> {
        self.get(
            SIMPLE_PRICE_PATH,
            &[("ids", ids), ("vs_currencies", vs_currencies)],
        )
        .await
    }

    /// Spot price of the configured asset in the configured currency.
    pub async fn get_spot_price(&self) -> Result<f64> {
        let resp = self
            .get_simple_price(self.asset_id(), self.currency_id())
            .await?;
        resp.price(self.asset_id(), self.currency_id())
    }
}

#[async_trait]
impl QuoteSource for QuoteClient {
    async fn spot_price(&self) -> Result<f64> {
        self.get_spot_price().await
    }
}
