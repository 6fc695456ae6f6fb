//! Logging setup
//!
//! Structured logging via `tracing`, with either human-readable or JSON
//! output. The filter honors `RUST_LOG` when set and otherwise falls back
//! to the configured level.

use crate::config::LoggingConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Must be called once, before any log lines are emitted.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let env_filter = build_env_filter(&config.level);

    if config.json {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    tracing::info!(json = config.json, "Logging initialized");

    Ok(())
}

fn build_env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Suppress verbose tower_http logs by default
        EnvFilter::new(format!(
            "meeple={level},meeple_bgg_client={level},tower_http=warn"
        ))
    })
}
