use anyhow::Result;
use flashcard_generator::{config, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Parses a log filter: a bare level or `RUST_LOG`-style directives
fn parse_log_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| {
        anyhow::anyhow!(
            "Invalid log filter: '{}' ({}). Use a level (error, warn, info, debug, trace) or directives like 'flashcard_generator=debug'",
            directives,
            e
        )
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration comes first so the log level can be taken from it
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    let filter = match parse_log_filter(&log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();

    info!(
        "Starting flashcard generator with log filter: {}",
        log_level
    );

    server::run(config).await?;

    Ok(())
}
