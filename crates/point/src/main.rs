use anyhow::{Context, Result};
use dotenv::dotenv;
use point::{handler::AppRouter, state::AppState};
use shared::{config::Config, utils::Logger};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let logger = Logger::new("point-service", config.is_dev)
        .context("Failed to initialize logger")?;

    let state = AppState::new(&config.point)
        .await
        .context("Failed to create AppState")?;

    info!(
        "🚀 Point service starting: port={} max_balance={:?} store_latency_ms={}",
        config.port, config.point.max_balance, config.point.store_latency_ms
    );

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("✅ Point service shutdown complete.");
    logger.shutdown();

    Ok(())
}
