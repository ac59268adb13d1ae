use crate::config::Config;
use crate::state::AppState;
use crate::utils::fmt_duration;
use crate::web::create_router;
use anyhow::Context;
use std::net::SocketAddr;
use std::process::ExitCode;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{error, info, warn};

/// Main application struct: configuration plus the state handed to the router.
pub struct App {
    config: Config,
    app_state: AppState,
}

impl App {
    pub fn new(config: Config) -> Self {
        let app_state = AppState::from_config(&config);
        info!(
            tags = app_state.tags.source().len(),
            lists = ?app_state.lists.keys().collect::<Vec<_>>(),
            page_size = config.page_size,
            create_field = %config.create_field,
            editors = config.editors.len(),
            "autocomplete views configured"
        );
        Self { config, app_state }
    }

    async fn bind(&self) -> anyhow::Result<TcpListener> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;
        info!(address = %addr, "web server listening");
        Ok(listener)
    }

    /// Serve until a shutdown signal arrives, then drain for at most
    /// `SHUTDOWN_TIMEOUT`.
    pub async fn run(self) -> ExitCode {
        let listener = match self.bind().await {
            Ok(listener) => listener,
            Err(e) => {
                error!(error = ?e, "web server failed to start");
                return ExitCode::FAILURE;
            }
        };

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let router = create_router(self.app_state);
        let mut server = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        tokio::select! {
            result = &mut server => {
                error!(result = ?result, "web server exited unexpectedly");
                return ExitCode::FAILURE;
            }
            _ = shutdown_signal() => {}
        }

        info!(
            timeout = fmt_duration(self.config.shutdown_timeout),
            "shutdown signal received, draining connections"
        );
        let _ = shutdown_tx.send(());

        match tokio::time::timeout(self.config.shutdown_timeout, server).await {
            Ok(Ok(Ok(()))) => {
                info!("graceful shutdown complete");
                ExitCode::SUCCESS
            }
            Ok(Ok(Err(e))) => {
                error!(error = ?e, "web server failed during shutdown");
                ExitCode::FAILURE
            }
            Ok(Err(e)) => {
                error!(error = ?e, "web server task panicked");
                ExitCode::FAILURE
            }
            Err(_) => {
                warn!("graceful shutdown timed out, exiting anyway");
                ExitCode::FAILURE
            }
        }
    }
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = ?e, "failed to listen for Ctrl-C");
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
                error!(error = ?e, "failed to listen for SIGTERM");
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
