//! # Currency Provider
//!
//! Outbound adapter for the freecurrencyapi.com exchange-rate API.
//!
//! Wraps the `/latest` and `/currencies` endpoints behind the
//! [`RateProvider`] port. Deliberately thin: no retries, no timeout override
//! beyond the transport default, no rate limiting.

use std::collections::HashMap;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use currency_types::{ProviderError, RateProvider};

/// Default base URL of the freecurrencyapi v1 API.
pub const DEFAULT_BASE_URL: &str = "https://api.freecurrencyapi.com/v1";

/// HTTP client for the freecurrencyapi exchange-rate provider.
pub struct FreeCurrencyApi {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

/// Envelope of a `/latest` response: rates keyed by currency code.
#[derive(Debug, Deserialize)]
struct LatestPayload {
    data: HashMap<String, f64>,
}

/// Envelope of a `/currencies` response: currency metadata keyed by code.
///
/// Kept as a raw JSON map so the provider's key enumeration order survives
/// (serde_json is built with `preserve_order`).
#[derive(Debug, Deserialize)]
struct CurrenciesPayload {
    data: Map<String, Value>,
}

impl FreeCurrencyApi {
    /// Creates a client against the production API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom base URL (tests, staging).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            http: reqwest::Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(&[("apikey", self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%status, path, "provider returned non-success status");
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| ProviderError::Malformed(e.to_string()))
    }
}

#[async_trait::async_trait]
impl RateProvider for FreeCurrencyApi {
    async fn latest_rates(
        &self,
        base: &str,
        target: &str,
    ) -> Result<HashMap<String, f64>, ProviderError> {
        let payload: LatestPayload = self
            .get_json("/latest", &[("base_currency", base), ("currencies", target)])
            .await?;
        Ok(payload.data)
    }

    async fn currencies(&self) -> Result<Map<String, Value>, ProviderError> {
        let payload: CurrenciesPayload = self.get_json("/currencies", &[]).await?;
        Ok(payload.data)
    }
}
