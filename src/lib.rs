//! retirement_survey library: survey intake for the retirement-relocation site
//!
//! Accepts survey submissions over HTTP, enriches each one with an approximate
//! location derived from the caller's IP address, stores it in MongoDB and
//! emails a notification to the operator.
//!
//! # Example
//!
//! ```no_run
//! use retirement_survey::{run_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     mongodb_uri: Some("mongodb://localhost:27017/survey".to_string()),
//!     smtp_from: Some("Survey Bot <bot@example.com>".to_string()),
//!     notification_email: Some("ops@example.com".to_string()),
//!     ..Default::default()
//! };
//!
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod config;
pub mod error_handling;
pub mod geoip;
pub mod initialization;
pub mod models;
pub mod notification;
pub mod server;
pub mod storage;
pub mod survey;

use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;
use tokio::net::TcpListener;

use crate::error_handling::InitializationError;
use crate::geoip::GeoLocator;
use crate::initialization::init_geo_client;
use crate::notification::SmtpNotifier;
use crate::storage::{init_store, SurveyStore};

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use models::{GeoLocation, SurveyRecord, SurveySubmission};
pub use server::{build_router, serve, serve_with_shutdown, AppState};
pub use survey::{SubmissionOutcome, SurveyService};

/// Builds the submission service from configuration.
///
/// Creates the geolocation client, the SMTP transport and, when a connection
/// string is configured, the MongoDB client. Nothing is contacted yet; the
/// store is verified on the first submission.
///
/// # Errors
///
/// Returns `InitializationError` if a client cannot be constructed.
pub async fn build_service(config: &Config) -> Result<SurveyService, InitializationError> {
    let client = init_geo_client(config)?;
    let locator = GeoLocator::new(client, &config.geo_api_url, config.geo_timeout());
    let notifier = SmtpNotifier::from_config(config)?;
    let store = init_store(config)
        .await?
        .map(|store| Arc::new(store) as Arc<dyn SurveyStore>);

    Ok(SurveyService::new(
        store,
        Arc::new(notifier),
        locator,
        config.email_timeout(),
    ))
}

/// Validates `config`, binds the listener and serves until shutdown.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, a client cannot be
/// built, the address cannot be bound, or the server fails.
pub async fn run_server(config: Config) -> Result<()> {
    config.validate().context("Invalid configuration")?;

    let service = build_service(&config)
        .await
        .context("Failed to initialize survey service")?;

    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("Failed to bind survey server to {}", config.listen))?;

    info!(
        "Geolocation via {} (timeout {}ms), email timeout {}ms",
        config.geo_api_url, config.geo_timeout_ms, config.email_timeout_ms
    );

    serve(listener, AppState::new(service)).await
}
