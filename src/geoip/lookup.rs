//! IP address lookup against the geolocation service.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};

use super::types::IpApiResponse;
use crate::config::UNKNOWN_IP;
use crate::models::GeoLocation;

/// Client for the geolocation service.
///
/// Cheap to clone; the underlying HTTP client is shared.
#[derive(Clone, Debug)]
pub struct GeoLocator {
    client: Arc<reqwest::Client>,
    base_url: String,
    timeout: Duration,
}

impl GeoLocator {
    /// Creates a locator that queries `base_url` and gives up after `timeout`.
    pub fn new(client: Arc<reqwest::Client>, base_url: &str, timeout: Duration) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// URL queried for `ip`.
    pub fn lookup_url(&self, ip: &str) -> String {
        format!("{}/{}/json/", self.base_url, ip)
    }

    /// Looks up the location of `ip`.
    ///
    /// Returns the default location when the address is unknown, the request
    /// times out, the service answers with a non-success status, or the body
    /// cannot be decoded. Failures are logged, never returned.
    pub async fn locate(&self, ip: &str) -> GeoLocation {
        if ip == UNKNOWN_IP || ip.trim().is_empty() {
            debug!("No caller IP available, skipping geolocation lookup");
            return GeoLocation::default();
        }

        match self.fetch(ip).await {
            Ok(location) => {
                info!(
                    "Location data fetched for {}: {}, {} ({})",
                    ip, location.city, location.country, location.region
                );
                location
            }
            Err(e) => {
                if e.is_timeout() {
                    warn!(
                        "Geolocation lookup for {} timed out after {}ms, using default location",
                        ip,
                        self.timeout.as_millis()
                    );
                } else {
                    warn!("Error fetching location data for {}: {}", ip, e);
                }
                GeoLocation::default()
            }
        }
    }

    async fn fetch(&self, ip: &str) -> Result<GeoLocation, reqwest::Error> {
        let response = self
            .client
            .get(self.lookup_url(ip))
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;

        let body: IpApiResponse = response.json().await?;
        Ok(GeoLocation::from(body))
    }
}
