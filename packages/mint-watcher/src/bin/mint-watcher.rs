//! Mint watcher binary.

use mint_watcher::{Config, MintWatcher};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting mint watcher");

    let config: Config = config::Config::builder()
        .add_source(config::File::with_name("mint-watcher").required(false))
        .add_source(config::Environment::with_prefix("WATCHER"))
        .build()
        .and_then(|c| c.try_deserialize())
        .unwrap_or_else(|e| {
            // Fall back only when no config exists; parsing errors fail hard.
            let err_str = format!("{e}");
            if err_str.contains("not found") || err_str.contains("missing field") {
                warn!(error = %e, "No config file found, using defaults");
                Config::default()
            } else {
                error!(error = %e, "FATAL: Config error; fix env vars or mint-watcher.toml");
                std::process::exit(1);
            }
        });

    if config.contract_id.is_empty() {
        warn!("WATCHER_CONTRACT_ID not set; the watcher will idle without fetching");
    }
    info!(contract = %config.contract_id, rpc = %config.rpc_url, "Configuration loaded");

    let mut watcher = MintWatcher::new(&config);
    let mut ticker =
        tokio::time::interval(std::time::Duration::from_millis(config.tick_interval_ms));

    loop {
        tokio::select! {
            _ = ticker.tick() => watcher.fetch_and_update().await,
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    info!(
        current = watcher.counts().current,
        max = watcher.counts().max,
        "Mint watcher stopped"
    );
    Ok(())
}
