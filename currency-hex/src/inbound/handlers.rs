//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use currency_types::{AppError, ConvertRequest, CurrencyListResponse, RateProvider};

use crate::CurrencyService;

/// Application state shared across handlers.
pub struct AppState<P: RateProvider> {
    pub service: CurrencyService<P>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": msg }),
            ),
            AppError::InvalidTargetCurrency => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": "Invalid target currency" }),
            ),
            AppError::Provider { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": message, "details": details }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Liveness endpoint.
pub async fn health() -> impl IntoResponse {
    "Currency Converter API Health 100%"
}

/// Convert an amount between two currencies.
#[tracing::instrument(skip(state))]
pub async fn convert<P: RateProvider>(
    State(state): State<Arc<AppState<P>>>,
    Json(req): Json<ConvertRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let resp = state.service.convert(req).await?;
    Ok(Json(resp))
}

/// List all supported currencies.
#[tracing::instrument(skip(state))]
pub async fn list_currencies<P: RateProvider>(
    State(state): State<Arc<AppState<P>>>,
) -> Result<impl IntoResponse, ApiError> {
    let currencies = state.service.list_currencies().await?;
    Ok(Json(CurrencyListResponse { currencies }))
}
