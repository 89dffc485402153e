//! Converter session state.
//!
//! Mirrors the state a conversion UI tracks: the currency list, a loading
//! flag, the last result, and a user-facing error string. Failures never
//! escape a session method; they set the fixed message and log the raw cause.
//! Overlapping triggers are sequenced by `&mut self`, so the result/loading
//! state cannot be clobbered by a slower earlier request.

use chrono::Local;

use currency_types::{ConversionRecord, Currency};

use crate::history::HistoryStore;
use crate::CurrencyClient;

const CURRENCY_LIST_ERROR: &str = "Failed to fetch currency list.";
const CONVERT_ERROR: &str = "Failed to convert currency.";

/// State container driving the conversion flow.
pub struct ConverterSession {
    client: CurrencyClient,
    history: HistoryStore,
    currencies: Vec<Currency>,
    result: Option<f64>,
    error: Option<String>,
    loading: bool,
}

impl ConverterSession {
    /// Creates a session over a client and an already-loaded history store.
    pub fn new(client: CurrencyClient, history: HistoryStore) -> Self {
        Self {
            client,
            history,
            currencies: Vec::new(),
            result: None,
            error: None,
            loading: false,
        }
    }

    /// The currency list from the last successful load.
    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    /// The converted amount of the last successful trigger.
    pub fn result(&self) -> Option<f64> {
        self.result
    }

    /// The user-facing error of the last failed action.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether an action is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The persisted conversion history.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Fetches the supported-currency list, replacing any prior list
    /// wholesale. The loading flag is cleared whatever the outcome.
    pub async fn load_currencies(&mut self) {
        self.loading = true;
        self.error = None;

        match self.client.currencies().await {
            Ok(list) => self.currencies = list,
            Err(err) => {
                tracing::error!(%err, "currency list fetch failed");
                self.error = Some(CURRENCY_LIST_ERROR.to_string());
            }
        }

        self.loading = false;
    }

    /// Triggers a conversion. On success the result is stored and a record
    /// stamped with the invocation time is appended to the history.
    pub async fn convert(&mut self, from: &str, to: &str, amount: f64) {
        self.loading = true;
        self.error = None;
        self.result = None;

        // Stamp at invocation, not at response arrival.
        let now = Local::now();

        match self.client.convert(from, to, amount).await {
            Ok(resp) => {
                self.result = Some(resp.converted_amount);
                let record = ConversionRecord {
                    from: resp.from,
                    to: resp.to,
                    amount: resp.amount,
                    result: resp.converted_amount,
                    date: now.format("%x").to_string(),
                    time: now.format("%X").to_string(),
                };
                if let Err(err) = self.history.add_conversion(record) {
                    tracing::error!(%err, "failed to persist conversion record");
                    self.error = Some(CONVERT_ERROR.to_string());
                }
            }
            Err(err) => {
                tracing::error!(%err, "conversion failed");
                self.error = Some(CONVERT_ERROR.to_string());
            }
        }

        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::DEFAULT_STORE_NAME;

    fn store() -> (tempfile::TempDir, HistoryStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::load(dir.path().join(DEFAULT_STORE_NAME)).unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_convert_success_sets_result_and_appends_history() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/currency/convert")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"from":"USD","to":"INR","amount":10.0,"convertedAmount":831.0,"rate":83.1}"#,
            )
            .create_async()
            .await;

        let (_dir, store) = store();
        let mut session = ConverterSession::new(CurrencyClient::new(server.url()), store);

        session.convert("USD", "INR", 10.0).await;

        assert_eq!(session.result(), Some(831.0));
        assert!(session.error().is_none());
        assert!(!session.is_loading());

        let history = session.history().conversion_history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].from, "USD");
        assert_eq!(history[0].to, "INR");
        assert_eq!(history[0].result, 831.0);
        assert!(!history[0].date.is_empty());
        assert!(!history[0].time.is_empty());
    }

    #[tokio::test]
    async fn test_convert_failure_sets_fixed_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/currency/convert")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"Currency conversion failed","details":"boom"}"#)
            .create_async()
            .await;

        let (_dir, store) = store();
        let mut session = ConverterSession::new(CurrencyClient::new(server.url()), store);

        session.convert("USD", "INR", 10.0).await;

        assert_eq!(session.result(), None);
        assert_eq!(session.error(), Some("Failed to convert currency."));
        assert!(!session.is_loading());
        assert!(session.history().conversion_history().is_empty());
    }

    #[tokio::test]
    async fn test_convert_failure_then_success_clears_error() {
        let mut server = mockito::Server::new_async().await;
        let fail = server
            .mock("POST", "/api/currency/convert")
            .with_status(500)
            .with_body(r#"{"error":"Currency conversion failed","details":"boom"}"#)
            .expect(1)
            .create_async()
            .await;

        let (_dir, store) = store();
        let mut session = ConverterSession::new(CurrencyClient::new(server.url()), store);

        session.convert("USD", "INR", 10.0).await;
        assert!(session.error().is_some());
        fail.assert_async().await;

        server
            .mock("POST", "/api/currency/convert")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"from":"USD","to":"INR","amount":10.0,"convertedAmount":831.0,"rate":83.1}"#,
            )
            .create_async()
            .await;

        session.convert("USD", "INR", 10.0).await;
        assert!(session.error().is_none());
        assert_eq!(session.result(), Some(831.0));
    }

    #[tokio::test]
    async fn test_load_currencies_replaces_list_wholesale() {
        let mut server = mockito::Server::new_async().await;
        let first = server
            .mock("GET", "/api/currency/list")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"currencies":[{"code":"USD","name":"US Dollar"},{"code":"EUR","name":"Euro"}]}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let (_dir, store) = store();
        let mut session = ConverterSession::new(CurrencyClient::new(server.url()), store);

        session.load_currencies().await;
        assert_eq!(session.currencies().len(), 2);
        first.assert_async().await;

        server
            .mock("GET", "/api/currency/list")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"currencies":[{"code":"INR","name":"Indian Rupee"}]}"#)
            .create_async()
            .await;

        session.load_currencies().await;
        assert_eq!(session.currencies().len(), 1);
        assert_eq!(session.currencies()[0].code, "INR");
    }

    #[tokio::test]
    async fn test_load_currencies_failure_sets_fixed_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/currency/list")
            .with_status(500)
            .with_body(r#"{"error":"Failed to fetch currencies","details":"down"}"#)
            .create_async()
            .await;

        let (_dir, store) = store();
        let mut session = ConverterSession::new(CurrencyClient::new(server.url()), store);

        session.load_currencies().await;

        assert_eq!(session.error(), Some("Failed to fetch currency list."));
        assert!(session.currencies().is_empty());
        assert!(!session.is_loading());
    }
}
