//! Persisted conversion history entry.

use serde::{Deserialize, Serialize};

/// One successful conversion, as remembered by the history store.
///
/// Records are created client-side immediately after a successful conversion
/// and appended to an ordered sequence, oldest first. A record is never
/// mutated once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    /// Base currency code.
    pub from: String,
    /// Target currency code.
    pub to: String,
    /// Amount in the base currency.
    pub amount: f64,
    /// Converted amount in the target currency.
    pub result: f64,
    /// Locale-formatted date, stamped at trigger time.
    pub date: String,
    /// Locale-formatted time, stamped at trigger time.
    pub time: String,
}
