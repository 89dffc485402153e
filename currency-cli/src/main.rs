//! Currency CLI
//!
//! Command-line presentation layer for the Currency Converter API.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use currency_client::{ConverterSession, CurrencyClient, DEFAULT_STORE_NAME, HistoryStore};

#[derive(Parser)]
#[command(name = "currency")]
#[command(author, version, about = "Currency Converter API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Currency Converter API
    #[arg(
        long,
        env = "CURRENCY_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    /// Path of the persisted conversion history
    #[arg(long, env = "CURRENCY_HISTORY_FILE", default_value = DEFAULT_STORE_NAME)]
    history_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount between two currencies
    Convert {
        /// Base currency code (e.g. USD)
        from: String,
        /// Target currency code (e.g. INR)
        to: String,
        /// Amount in the base currency
        amount: f64,
    },
    /// List the supported currencies
    List,
    /// Show the persisted conversion history
    History,
    /// Check API liveness
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = CurrencyClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Convert { from, to, amount } => {
            let history = HistoryStore::load(&cli.history_file)?;
            let mut session = ConverterSession::new(client, history);

            session.convert(&from, &to, amount).await;

            match session.result() {
                Some(result) => {
                    println!("{} {} = {} {}", amount, from.to_uppercase(), result, to.to_uppercase());
                }
                None => {
                    let message = session
                        .error()
                        .unwrap_or("Failed to convert currency.")
                        .to_string();
                    anyhow::bail!(message);
                }
            }
        }

        Commands::List => {
            let currencies = client.currencies().await?;
            println!("{}", serde_json::to_string_pretty(&currencies)?);
        }

        Commands::History => {
            let history = HistoryStore::load(&cli.history_file)?;
            println!(
                "{}",
                serde_json::to_string_pretty(history.conversion_history())?
            );
        }
    }

    Ok(())
}
