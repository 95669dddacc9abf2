//! Geolocation service data structures.

use serde::Deserialize;

use crate::config::UNKNOWN_LOCATION;
use crate::models::GeoLocation;

/// Response body of the ipapi-style lookup endpoint.
///
/// Only the fields the service stores are decoded. Reserved or invalid
/// addresses come back as `{"error": true, ...}` with none of these fields,
/// which decodes to an all-`None` value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IpApiResponse {
    pub country_name: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

fn or_unknown(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_LOCATION.to_string())
}

impl From<IpApiResponse> for GeoLocation {
    fn from(response: IpApiResponse) -> Self {
        Self {
            country: or_unknown(response.country_name),
            city: or_unknown(response.city),
            region: or_unknown(response.region),
            latitude: response.latitude,
            longitude: response.longitude,
        }
    }
}
