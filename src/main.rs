use review_service::config::AppConfig;
use review_service::health::HealthStatus;
use review_service::{app, build_state, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    telemetry::init_logging()?;

    info!("🚀 Review Service starting");

    // Load configuration
    let config = AppConfig::load()?;
    info!("📋 Configuration loaded");
    info!("   - Server: {}", config.bind_address());

    // Stats and tracing exporters only report their toggles
    let telemetry_config = config.telemetry.clone();
    tokio::spawn(async move {
        telemetry::init_stats(&telemetry_config);
        telemetry::init_tracing(&telemetry_config);
    });

    // Build review index and shared state
    let state = build_state(&config);
    let health = state.health.clone();
    info!(
        "✅ Review index ready ({} reviews in {} categories)",
        state.review_service.index().len(),
        state.review_service.index().categories().len()
    );
    info!(
        "   - Fallback sample size: {}",
        state.review_service.max_reviews_to_serve()
    );

    // Start server
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Review Service listening on http://{}", addr);
    info!("📡 Available endpoints:");
    info!("   GET  /health   - Health check");
    info!("   POST /reviews  - Reviews for context keys");

    health.set_serving();

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal(health))
        .await?;

    info!("👋 Server shut down");

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM, then stop reporting as serving
async fn shutdown_signal(health: HealthStatus) {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    health.set_not_serving();
    info!("🛑 Shutdown signal received, draining connections");
}
