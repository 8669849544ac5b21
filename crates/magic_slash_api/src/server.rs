//! HTTP server configuration and startup
//!
//! This module provides the main server configuration and startup logic.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::Notify;

use crate::{browser, routes, AppState, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_PUBLIC_DIR};

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Directory holding the client assets
    pub public_dir: PathBuf,

    /// Open the default browser once listening
    pub open_browser: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            open_browser: true,
        }
    }
}

impl ApiConfig {
    /// Address the browser should be pointed at.
    pub fn local_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}

/// API server
pub struct ApiServer {
    config: ApiConfig,
    state: AppState,
}

impl ApiServer {
    /// Create a new API server with the given configuration.
    pub fn new(config: ApiConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Build the Axum router with all routes, middleware and static assets.
    pub fn router(&self) -> Router {
        routes::create_app(self.state.clone(), &self.config.public_dir)
    }

    /// Start the server and listen for requests.
    ///
    /// This method blocks until the server is shut down gracefully via
    /// CTRL+C (SIGINT), SIGTERM, or a `POST /api/shutdown` request.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the configured address.
    pub async fn serve(self) -> anyhow::Result<()> {
        let addr = SocketAddr::from((self.config.host.parse::<IpAddr>()?, self.config.port));

        let listener = TcpListener::bind(addr).await?;
        let app = self.router();

        let url = self.config.local_url();
        tracing::info!(address = %addr, "Magic Slash Web UI running at {}", url);
        tracing::info!("Press Ctrl+C to stop the server");

        if self.config.open_browser {
            browser::open_url(&url);
        }

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal(self.state.shutdown.clone()))
            .await
            .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

        tracing::info!("Server stopped");

        Ok(())
    }
}

/// Wait for a shutdown signal
///
/// This function waits for either:
/// - CTRL+C (SIGINT) on all platforms
/// - SIGTERM on Unix platforms
/// - a notification on `requested`, sent by the shutdown endpoint
pub(crate) async fn shutdown_signal(requested: Arc<Notify>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received CTRL+C, initiating graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        },
        _ = requested.notified() => {
            tracing::info!("Server stopped by user request");
        },
    }
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
