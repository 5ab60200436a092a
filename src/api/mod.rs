//! REST API around the dispatch engine.
//!
//! Provides:
//! - `GET /` service name and version
//! - `POST /productionplan` (alias `POST /powerplant`) dispatch of one request

mod error;
mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::dispatch::Dispatcher;

pub use error::ApiError;
pub use types::ServiceInfo;

/// Immutable application state shared across all request handlers.
///
/// Holds only the configured dispatcher, which is `Copy`; every request
/// dispatches its own scenario with no shared mutable data.
pub struct AppState {
    /// Dispatcher configured with the selected cost model.
    pub dispatcher: Dispatcher,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::get_info))
        .route("/productionplan", post(handlers::post_production_plan))
        .route("/powerplant", post(handlers::post_production_plan))
        .with_state(state)
}

/// Binds to the given address and serves the API until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "API server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! { _ = ctrl_c => {}, _ = terminate => {}, }
    tracing::info!("shutdown signal received");
}
