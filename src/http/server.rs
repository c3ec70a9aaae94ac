//! HTTP server startup logic.

use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use crate::config::{ServerConfig, GRACEFUL_SHUTDOWN_TIMEOUT_SECS};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Start the HTTP server based on configuration.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &ServerConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr();
    tracing::info!(%addr, "Starting HTTP server");

    let listener = bind(addr).await?;
    serve(listener, app, shutdown::shutdown_signal()).await
}

/// Bind a TCP listener. A port already in use is fatal; there is no retry.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve `app` on `listener` until `shutdown` resolves.
///
/// After `shutdown` resolves, in-flight requests get
/// `GRACEFUL_SHUTDOWN_TIMEOUT_SECS` to finish before the server returns anyway.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr()?;
    tracing::info!(addr = %local_addr, "Listening on http://{}", local_addr);

    let (drain_tx, drain_rx) = oneshot::channel::<()>();
    let signal = async move {
        shutdown.await;
        let _ = drain_tx.send(());
    };

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .into_future();

    let drain_deadline = async move {
        match drain_rx.await {
            Ok(()) => tokio::time::sleep(Duration::from_secs(GRACEFUL_SHUTDOWN_TIMEOUT_SECS)).await,
            Err(_) => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        result = server => {
            result?;
            tracing::info!("Server stopped");
        }
        _ = drain_deadline => {
            tracing::warn!(
                timeout_secs = GRACEFUL_SHUTDOWN_TIMEOUT_SECS,
                "Connections still open after shutdown timeout, stopping anyway"
            );
        }
    }

    Ok(())
}
