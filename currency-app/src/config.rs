//! Configuration loading from environment.

use std::env;

/// Application configuration, read-only after startup.
pub struct Config {
    pub port: u16,
    pub api_key: String,
    pub provider_base_url: Option<String>,
    pub frontend_origin: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let api_key = env::var("FREE_CURRENCY_API_KEY")
            .map_err(|_| anyhow::anyhow!("FREE_CURRENCY_API_KEY environment variable is required"))?;

        let provider_base_url = env::var("FREE_CURRENCY_API_URL").ok();
        let frontend_origin = env::var("FRONTEND_URL").ok();

        Ok(Self {
            port,
            api_key,
            provider_base_url,
            frontend_origin,
        })
    }
}
