use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use quotebus::application::scenario::run_scenario;
use quotebus::config::DemoConfig;
use quotebus::infrastructure::exchange::StockExchange;

/// Observer-pattern demo: a stock exchange notifying traders and trading
/// robots about price changes.
#[derive(Debug, Parser)]
#[command(name = "quotebus", version, about)]
struct Cli {
    /// Path to a TOML scenario config; runs the built-in AAPL demo when
    /// omitted
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false) // cleaner
        .init();

    let config = match &cli.config {
        Some(path) => DemoConfig::from_path(path)?,
        None => DemoConfig::default(),
    };

    info!(
        "Starting quotebus demo: {} observers, {} steps",
        config.observers.len(),
        config.steps.len()
    );

    let mut exchange = StockExchange::new();
    run_scenario(&mut exchange, &config.observers, &config.steps)?;

    info!(
        "Demo finished with {} live subscriptions",
        exchange.subscriber_count()
    );
    Ok(())
}
