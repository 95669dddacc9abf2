//! HTTP client initialization.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::config::{Config, USER_AGENT};

/// Initializes the HTTP client used for geolocation lookups.
///
/// The client-wide timeout is the geolocation deadline, so a lookup can never
/// outlive it even if a caller forgets the per-request timeout.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_geo_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(config.geo_timeout())
        .user_agent(USER_AGENT)
        .build()?;
    Ok(Arc::new(client))
}
