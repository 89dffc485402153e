//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use currency_types::RateProvider;

use super::handlers::{self, AppState};
use crate::CurrencyService;

/// HTTP Server for the Currency Converter API.
pub struct HttpServer<P: RateProvider> {
    state: Arc<AppState<P>>,
    allowed_origin: Option<HeaderValue>,
}

impl<P: RateProvider> HttpServer<P> {
    /// Creates a new HTTP server with the given service.
    ///
    /// Without a configured origin, CORS is permissive.
    pub fn new(service: CurrencyService<P>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
            allowed_origin: None,
        }
    }

    /// Restricts cross-origin callers to the given origin.
    pub fn with_allowed_origin(mut self, origin: HeaderValue) -> Self {
        self.allowed_origin = Some(origin);
        self
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        let cors = match &self.allowed_origin {
            Some(origin) => CorsLayer::new()
                .allow_origin(origin.clone())
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
            None => CorsLayer::permissive(),
        };

        Router::new()
            .route("/", get(handlers::health))
            .route("/api/currency/convert", post(handlers::convert::<P>))
            .route("/api/currency/list", get(handlers::list_currencies::<P>))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
