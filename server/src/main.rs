// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

use std::sync::Arc;

use anyhow::{Result, anyhow};
use server::AppState;
use server::config::ServerConfig;
use server::transport::app_router;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};

use crate::log::LogLevel;

mod log;

#[tokio::main]
async fn main() -> Result<()> {
    // CONFIG_FILE, then config.yaml, then environment variables
    let config = ServerConfig::load()?;

    let log_level: LogLevel = config.log_level.parse().map_err(|e: String| anyhow!(e))?;
    let _guard = log::new(log_level);

    let host = config.host.clone();
    let port = config.port;
    let app_state = Arc::new(AppState::new(config));

    match app_state.sheets.credentials() {
        Ok(source) => info!(kind = source.kind(), "Service-account credentials resolved"),
        Err(e) => warn!("Registrations will fail until credentials are configured: {e}"),
    }
    if app_state.config.google.sheet_id.is_none() {
        warn!("GOOGLE_SHEET_ID is not set");
    }

    let app = app_router(app_state);

    let listener = TcpListener::bind((host.as_str(), port)).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
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
}
