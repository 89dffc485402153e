//! Supported currency descriptor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A currency as reported by the rate provider.
///
/// Immutable once fetched; the supported set is replaced wholesale on each
/// list refresh, preserving the provider's enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO-4217-like code, unique within one provider response.
    pub code: String,
    /// Human-readable name, e.g. "US Dollar".
    pub name: String,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_display() {
        let usd = Currency {
            code: "USD".into(),
            name: "US Dollar".into(),
        };
        assert_eq!(usd.to_string(), "USD (US Dollar)");
    }

    #[test]
    fn test_currency_deserializes_from_provider_entry() {
        // Provider entries carry extra metadata we ignore.
        let json = r#"{"symbol":"$","name":"US Dollar","code":"USD","decimal_digits":2}"#;
        let currency: Currency = serde_json::from_str(json).unwrap();
        assert_eq!(currency.code, "USD");
        assert_eq!(currency.name, "US Dollar");
    }
}
