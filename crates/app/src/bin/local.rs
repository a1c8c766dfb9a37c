// Sports Manager API - Local Server

use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use sports_manager_common::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().inspect_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
    })?;

    sports_manager_app::init_tracing(&config);

    info!(
        app_name = %config.app_name,
        app_env = ?config.app_env,
        store_backend = ?config.store_backend,
        "Starting Sports Manager API"
    );

    let app = sports_manager_app::create_app(&config)
        .await
        .inspect_err(|e| {
            error!("Failed to create application: {}", e);
        })?;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address: {}", e))?;

    info!("Health check available at http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

#[mutants::skip] // Waits on OS signals
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
