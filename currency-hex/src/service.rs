//! Currency Application Service
//!
//! Orchestrates conversion and list operations through the provider port.
//! Contains NO infrastructure logic - validation, rate lookup, arithmetic,
//! and error translation only.

use currency_types::{AppError, ConvertRequest, ConvertResponse, Currency, RateProvider};

/// User-facing message when the upstream call fails during a conversion.
const CONVERSION_FAILED: &str = "Currency conversion failed";
/// User-facing message when the upstream call fails during a list fetch.
const LIST_FAILED: &str = "Failed to fetch currencies";

/// Application service for currency operations.
///
/// Generic over `P: RateProvider` - the adapter is injected at compile time.
/// This enables:
/// - Swapping providers without code changes
/// - Testing with an in-memory provider
/// - Compile-time checks for port implementation
pub struct CurrencyService<P: RateProvider> {
    provider: P,
}

impl<P: RateProvider> CurrencyService<P> {
    /// Creates a new currency service with the given provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Converts an amount between two currencies at the latest provider rate.
    ///
    /// `converted_amount` is `rate * amount` in plain f64 arithmetic; no
    /// rounding or fixed-point policy is applied.
    pub async fn convert(&self, req: ConvertRequest) -> Result<ConvertResponse, AppError> {
        let (from, to, amount) = validate(req)?;

        let rates = self
            .provider
            .latest_rates(&from, &to)
            .await
            .map_err(|e| AppError::provider(CONVERSION_FAILED, e))?;

        let rate = *rates.get(&to).ok_or(AppError::InvalidTargetCurrency)?;
        let converted_amount = rate * amount;

        Ok(ConvertResponse {
            from,
            to,
            amount,
            converted_amount,
            rate,
        })
    }

    /// Fetches the supported-currency set and normalizes the provider's
    /// keyed object into an ordered sequence, preserving key order.
    pub async fn list_currencies(&self) -> Result<Vec<Currency>, AppError> {
        let keyed = self
            .provider
            .currencies()
            .await
            .map_err(|e| AppError::provider(LIST_FAILED, e))?;

        let mut currencies = Vec::with_capacity(keyed.len());
        for (code, value) in keyed {
            let currency: Currency = serde_json::from_value(value).map_err(|e| {
                AppError::Provider {
                    message: LIST_FAILED.into(),
                    details: format!("malformed entry for {code}: {e}"),
                }
            })?;
            currencies.push(currency);
        }

        Ok(currencies)
    }
}

/// Rejects requests with missing or falsy fields.
///
/// A zero amount is rejected along with missing ones; negative amounts fail
/// the `amount > 0` rule of the data model.
fn validate(req: ConvertRequest) -> Result<(String, String, f64), AppError> {
    let from = req.from.filter(|s| !s.is_empty());
    let to = req.to.filter(|s| !s.is_empty());
    let amount = req.amount.filter(|a| *a > 0.0);

    match (from, to, amount) {
        (Some(from), Some(to), Some(amount)) => Ok((from, to, amount)),
        _ => Err(AppError::missing_fields()),
    }
}
