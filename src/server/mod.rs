//! HTTP server for survey intake.
//!
//! Provides two endpoints:
//! - `POST /api/survey` - store a survey response and notify the operator
//! - `GET /api/test` - send a diagnostic email
//!
//! The server stops accepting connections on Ctrl+C or SIGTERM and lets
//! in-flight requests finish.

mod handlers;
mod types;

use std::future::Future;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use handlers::{survey_handler, test_email_handler};
pub use handlers::client_ip;
pub use types::{
    AppState, DiagnosticDetails, DiagnosticResponse, DiagnosticStatus, SubmissionErrorResponse,
    SubmissionResponse,
};

/// Builds the router with all endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/survey", post(survey_handler))
        .route("/api/test", get(test_email_handler))
        .with_state(state)
}

/// Serves until Ctrl+C or SIGTERM.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), anyhow::Error> {
    serve_with_shutdown(listener, state, shutdown_signal()).await
}

/// Serves until `shutdown` resolves.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    state: AppState,
    shutdown: F,
) -> Result<(), anyhow::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    log::info!("Survey server listening on http://{}/", addr);
    log::info!("  - Submit: POST http://{}/api/survey", addr);
    log::info!("  - Email test: GET http://{}/api/test", addr);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!("Survey server error: {}", e))?;

    log::info!("Survey server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => log::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                log::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                log::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                log::error!("Failed to install signal handler: {}", e);
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
