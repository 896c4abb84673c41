//! Cambio currency converter.
//!
//! Thin entry point: loads configuration, builds the feed-backed
//! converter, converts each argument of the form `"<CODE> <amount>"`
//! (or each stdin line when no arguments are given) and prints one
//! result per line.
//!
//! Usage: cambio "AUD 562.5" "JPY 5000"

use std::io::BufRead;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cambio_core::convert::Converter;
use cambio_core::rates::RateSource;
use cambio_feed::FeedClient;
use cambio_shared::AppConfig;
use cambio_shared::types::CurrencyCode;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cambio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");
    let default_currency = CurrencyCode::new(config.converter.default_currency.clone());

    // Build the feed-backed converter; construction performs the one fetch
    let source = FeedClient::new(&config.feed)?;
    let converter = Converter::connect(source, default_currency).await?;
    info!(
        rates = converter.rates().len(),
        default = %converter.default_currency(),
        "rate table loaded"
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        for line in std::io::stdin().lock().lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            print_result(&converter, line);
        }
    } else {
        for arg in &args {
            print_result(&converter, arg);
        }
    }

    Ok(())
}

/// Prints one outcome line; a bad input line is a result, not a crash.
fn print_result<S: RateSource>(converter: &Converter<S>, line: &str) {
    match converter.convert_line(line) {
        Ok(conversion) => println!("{conversion}"),
        Err(e) => println!("error: {e}"),
    }
}
