//! Marquee - event page state engine
//!
//! Main entry point: loads configuration, wires the engine, and runs the
//! drivers until interrupted.

use std::sync::Arc;

use marquee_domain::Config;
use marquee_lib::AppContext;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging FIRST so we can see .env loading
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load environment variables from .env file
    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(e) => info!(error = %e, "Could not load .env file"),
    }

    let config = match marquee_infra::config::load() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "No usable configuration found; using defaults");
            Config::default()
        }
    };
    info!(target = %config.event.target, "Counting down");

    let ctx = Arc::new(AppContext::new(config)?);
    ctx.start().await?;
    match marquee_lib::commands::countdown::time_until_event(&ctx) {
        Some(until) => info!(%until, "Marquee initialized successfully"),
        None => info!("Marquee initialized successfully; the event is live"),
    }

    tokio::signal::ctrl_c().await?;
    info!("Shutting down");
    ctx.shutdown().await?;

    Ok(())
}
