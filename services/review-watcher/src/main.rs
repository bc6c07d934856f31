//! Review Watcher CLI
//!
//! Command-line interface for the homework review status watcher.

use std::path::PathBuf;

use clap::Parser;
use review_watcher::{load_config, Config, WatcherBuilder, WatcherError};
use tracing::Level;

#[derive(Parser)]
#[command(name = "review-watcher")]
#[command(about = "Homework review status watcher with Telegram notifications")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seconds between polls (overrides config file)
    #[arg(long)]
    retry_interval: Option<u64>,

    /// Log level
    #[arg(short, long, default_value = "info", value_parser = parse_log_level)]
    log_level: Level,
}

fn parse_log_level(s: &str) -> Result<Level, String> {
    s.parse().map_err(|_| {
        format!(
            "Invalid log level: {}. Use: trace, debug, info, warn, error",
            s
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    if let Ok(path) = dotenv::dotenv() {
        tracing::debug!("Loaded environment from {:?}", path);
    }

    tracing::debug!(
        "Parsed command line arguments: config={:?}, retry_interval={:?}, log_level={:?}",
        args.config,
        args.retry_interval,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    config.resolve_secrets();

    if let Some(retry_interval) = args.retry_interval {
        config.polling.retry_interval_seconds = retry_interval;
    }

    let watcher = match WatcherBuilder::new(config).build() {
        Ok(watcher) => watcher,
        Err(WatcherError::MissingConfiguration(_)) => {
            tracing::error!("Программа принудительно остановлена");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!("Starting review watcher");
    watcher.start().await?;

    Ok(())
}
