// ai-services-rs/src/main.rs
// AI Services - heuristic test generation and failure analysis over HTTP
// Port 8001 by default, override with AI_SERVICES_PORT

use std::sync::Arc;

use ai_services::{database, AiServices, SERVICE_NAME};
use config_rs::Settings;
use error_handling_rs::{init_logging, LoggingConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load()?;

    init_logging(Some(LoggingConfig {
        level: settings.log_level.clone(),
        service_name: SERVICE_NAME.to_string(),
        json_format: settings.log_json,
    }))?;

    tracing::debug!(?settings, "Loaded settings");
    tracing::info!(app = %settings.app_name, version = %settings.version, debug = settings.debug, "Starting AI Services...");

    database::init_db(&settings).await?;

    let addr = settings.bind_address()?;
    let services = Arc::new(AiServices::new(settings));
    let app = services.create_router();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "AI Services started successfully");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down AI Services...");
    database::close_db().await;

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
