//! # Currency Converter Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the rate provider adapter
//! - Create the currency service
//! - Start the HTTP server

mod config;

use axum::http::HeaderValue;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use currency_hex::{CurrencyService, inbound::HttpServer};
use currency_provider::FreeCurrencyApi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,currency_app=debug,currency_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting currency server on port {}", config.port);

    // Build the provider adapter
    let provider = match &config.provider_base_url {
        Some(url) => FreeCurrencyApi::with_base_url(&config.api_key, url),
        None => FreeCurrencyApi::new(&config.api_key),
    };

    // Create the currency service
    let service = CurrencyService::new(provider);

    // Create the HTTP server, restricting CORS when an origin is configured
    let mut server = HttpServer::new(service);
    if let Some(origin) = &config.frontend_origin {
        let origin: HeaderValue = origin
            .parse()
            .map_err(|_| anyhow::anyhow!("FRONTEND_URL is not a valid origin: {origin}"))?;
        tracing::info!("Allowing cross-origin requests from {:?}", origin);
        server = server.with_allowed_origin(origin);
    }

    let addr = format!("0.0.0.0:{}", config.port);
    server.run(&addr).await?;

    Ok(())
}
