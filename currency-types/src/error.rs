//! Error types for the currency conversion service.

use crate::ports::ProviderError;

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes: `Validation` and
/// `InvalidTargetCurrency` are the caller's fault (400), `Provider` means
/// the upstream call failed or returned unusable data (500).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid target currency")]
    InvalidTargetCurrency,

    #[error("{message}: {details}")]
    Provider { message: String, details: String },
}

impl AppError {
    /// Wraps a provider failure with the operation's user-facing message.
    pub fn provider(message: impl Into<String>, err: ProviderError) -> Self {
        AppError::Provider {
            message: message.into(),
            details: err.to_string(),
        }
    }

    /// The fixed message returned when a conversion request is incomplete.
    pub fn missing_fields() -> Self {
        AppError::Validation("Missing required fields: from, to, amount".into())
    }
}
