//! Exchange-rate provider port.
//!
//! This trait defines the interface to the external exchange-rate API.
//! Implementations can be HTTP clients, mock providers, etc.

use std::collections::HashMap;

use serde_json::{Map, Value};

/// Error type for provider operations.
///
/// All three variants surface to callers as a 500 with a details string;
/// none are retried.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("unusable response body: {0}")]
    Malformed(String),
}

/// Port trait for exchange-rate providers.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync + 'static {
    /// Latest rate(s) for `base`, restricted to `target`.
    ///
    /// The returned map is keyed by currency code. A missing `target` key is
    /// not an error at this level; the service decides what that means.
    async fn latest_rates(
        &self,
        base: &str,
        target: &str,
    ) -> Result<HashMap<String, f64>, ProviderError>;

    /// The full supported-currency set, keyed by code, in provider order.
    async fn currencies(&self) -> Result<Map<String, Value>, ProviderError>;
}
