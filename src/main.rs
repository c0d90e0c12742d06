//! Pokedex - Main entry point
//!
//! Interactive command-line Pokedex backed by PokeAPI, with every API
//! response memoized in a time-expiring cache.

use anyhow::Result;
use pokedex::client::{AsyncPokeApiClient, AsyncPokeApiClientImpl};
use pokedex::repl::run_repl;
use pokedex::{Config, PokeApiClient, Pokedex};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can apply
    let config = Config::from_env();

    let fallback_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));

    // Logs go to stderr; stdout belongs to the prompt
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Starting Pokedex with API URL: {}", config.base_url);
    info!("Cache TTL: {} seconds", config.cache_ttl_secs);

    let sync_client = PokeApiClient::new(&config);
    let metrics = sync_client.metrics().clone();
    let client = Arc::new(AsyncPokeApiClientImpl::new(sync_client)) as Arc<dyn AsyncPokeApiClient>;

    let mut session = Pokedex::new(client, &config);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_repl(&mut session, stdin, &mut stdout).await?;

    let summary = metrics.summary();
    info!(
        http_requests = summary.http_requests_total,
        http_errors = summary.http_errors_total,
        avg_ms = summary.http_duration_avg_ms,
        cache_hits = summary.cache_hits_total,
        cache_misses = summary.cache_misses_total,
        stale_payloads = summary.stale_payloads_total,
        "Pokedex shutdown complete"
    );
    Ok(())
}
