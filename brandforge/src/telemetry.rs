//! Telemetry initialization: structured logging via `tracing`.
//!
//! The subscriber combines an `EnvFilter` (controlled by `RUST_LOG`, default
//! `info`) with a fmt layer for console output. Handlers and repositories
//! annotate themselves with `#[tracing::instrument]` so request flows show up
//! as structured spans.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize the global tracing subscriber.
///
/// Safe to call once per process; returns an error if a subscriber is
/// already installed.
pub fn init_telemetry() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    tracing::info!("Telemetry initialized");
    Ok(())
}
