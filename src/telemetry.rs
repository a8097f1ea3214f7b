use crate::config::TelemetryConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Returns whether stats would be collected. No exporter exists yet.
pub fn init_stats(config: &TelemetryConfig) -> bool {
    if config.disable_stats {
        info!("Stats disabled");
        return false;
    }
    info!("Stats enabled, but temporarily unavailable");
    true
}

/// Returns whether tracing would be exported. No exporter exists yet.
pub fn init_tracing(config: &TelemetryConfig) -> bool {
    if config.disable_tracing {
        info!("Tracing disabled");
        return false;
    }
    info!("Tracing enabled, but temporarily unavailable");
    true
}
