//! Runtime configuration for the quote source.
//!
//! [`ChainConfig::default`] points at the public CoinGecko endpoint.
//! [`ChainConfig::from_env`] layers environment overrides on top, which is
//! how the `options_chain` binary is pointed at a mock server.

use std::env;
use std::time::Duration;

use crate::constants::{
    DEFAULT_QUOTE_TIMEOUT, QUOTE_API_BASE_URL, QUOTE_ASSET_ID, QUOTE_CURRENCY_ID,
};
use crate::error::{ChainError, Result};

/// Overrides [`ChainConfig::quote_base_url`].
pub const ENV_QUOTE_URL: &str = "OPTIONS_CHAIN_QUOTE_URL";

/// Overrides [`ChainConfig::quote_timeout`], in whole seconds.
pub const ENV_QUOTE_TIMEOUT_SECS: &str = "OPTIONS_CHAIN_QUOTE_TIMEOUT_SECS";

/// Quote source settings for one chain view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    /// Base URL of the quote API (no trailing slash).
    pub quote_base_url: String,
    /// Asset identifier sent as `ids`.
    pub asset_id: String,
    /// Currency identifier sent as `vs_currencies`.
    pub currency_id: String,
    /// Upper bound on the single quote request.
    pub quote_timeout: Duration,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            quote_base_url: QUOTE_API_BASE_URL.to_owned(),
            asset_id: QUOTE_ASSET_ID.to_owned(),
            currency_id: QUOTE_CURRENCY_ID.to_owned(),
            quote_timeout: DEFAULT_QUOTE_TIMEOUT,
        }
    }
}

impl ChainConfig {
    /// Defaults overridden by `OPTIONS_CHAIN_QUOTE_URL` and
    /// `OPTIONS_CHAIN_QUOTE_TIMEOUT_SECS` when set.
    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::default();
        if let Ok(url) = env::var(ENV_QUOTE_URL) {
            cfg = cfg.with_quote_base_url(url)?;
        }
        if let Ok(raw) = env::var(ENV_QUOTE_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ChainError::InvalidArgument(format!(
                    "{ENV_QUOTE_TIMEOUT_SECS}={raw:?} is not a number"
                ))
            })?;
            cfg = cfg.with_quote_timeout(Duration::from_secs(secs))?;
        }
        Ok(cfg)
    }

    /// Replace the quote base URL. The URL must parse.
    pub fn with_quote_base_url(mut self, base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        url::Url::parse(&base_url)?;
        self.quote_base_url = base_url.trim_end_matches('/').to_owned();
        Ok(self)
    }

    /// Replace the quote request timeout. Zero is rejected.
    pub fn with_quote_timeout(mut self, timeout: Duration) -> Result<Self> {
        if timeout.is_zero() {
            return Err(ChainError::InvalidArgument(
                "quote timeout must be non-zero".into(),
            ));
        }
        self.quote_timeout = timeout;
        Ok(self)
    }
}
