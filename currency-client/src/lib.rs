//! # Currency Client SDK
//!
//! A typed Rust client for the Currency Converter API, plus the pieces the
//! presentation layer needs: a persisted [`HistoryStore`] and a
//! [`ConverterSession`] that tracks loading/result/error state.

pub mod history;
pub mod session;

pub use history::{DEFAULT_STORE_NAME, HistoryStore, StoreError};
pub use session::ConverterSession;

use currency_types::{ConvertRequest, ConvertResponse, Currency, CurrencyListResponse};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Currency Converter API client.
pub struct CurrencyClient {
    base_url: String,
    http: Client,
}

impl CurrencyClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is alive.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self.http.get(&self.base_url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Fetches the supported-currency list, in provider order.
    pub async fn currencies(&self) -> Result<Vec<Currency>, ClientError> {
        let resp: CurrencyListResponse = self.get("/api/currency/list").await?;
        Ok(resp.currencies)
    }

    /// Converts `amount` from one currency to another.
    pub async fn convert(
        &self,
        from: &str,
        to: &str,
        amount: f64,
    ) -> Result<ConvertResponse, ClientError> {
        let req = ConvertRequest::new(from, to, amount);
        self.post("/api/currency/convert", &req).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
