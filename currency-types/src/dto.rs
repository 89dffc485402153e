//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Currency;

// ─────────────────────────────────────────────────────────────────────────────
// Conversion DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to convert an amount between two currencies.
///
/// Every field is optional at the wire level so that an incomplete body
/// reaches the service and is rejected with a 400, rather than bouncing off
/// the deserializer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertRequest {
    /// Base currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Target currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Amount in the base currency, must be > 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl ConvertRequest {
    /// Convenience constructor for a fully populated request.
    pub fn new(from: impl Into<String>, to: impl Into<String>, amount: f64) -> Self {
        Self {
            from: Some(from.into()),
            to: Some(to.into()),
            amount: Some(amount),
        }
    }
}

/// Response after a successful conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    /// Base currency code, echoed back
    pub from: String,
    /// Target currency code, echoed back
    pub to: String,
    /// Amount in the base currency, echoed back
    pub amount: f64,
    /// `rate * amount`, plain f64 arithmetic, no rounding
    pub converted_amount: f64,
    /// Units of target currency per one unit of base currency
    pub rate: f64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Currency list DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Response carrying the full supported-currency set, in provider order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyListResponse {
    pub currencies: Vec<Currency>,
}
