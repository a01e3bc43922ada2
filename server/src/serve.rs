//! Process plumbing shared by both service binaries: logging setup, the
//! listener, and graceful shutdown.

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::{LoggingConfig, ServerConfig};

/// Install the global tracing subscriber. `RUST_LOG` wins over `logging.level`.
pub fn init_tracing(logging: &LoggingConfig) {
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| logging.level.clone());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();
}

/// Bind `app` to `server.host:server.port` and serve until SIGINT/SIGTERM.
pub async fn run(server: &ServerConfig, app: Router) -> std::io::Result<()> {
    let listener = TcpListener::bind(server.listen_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for SIGINT: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    () = ctrl_c => info!("Received SIGINT"),
                    _ = sigterm.recv() => info!("Received SIGTERM"),
                }
            }
            Err(e) => {
                tracing::warn!("Failed to register SIGTERM handler: {e}");
                ctrl_c.await;
                info!("Received SIGINT");
            }
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await;
        info!("Received SIGINT");
    }
}
