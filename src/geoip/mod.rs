//! IP geolocation.
//!
//! Resolves a caller's IP address to an approximate location through an
//! ipapi-compatible HTTP service (`GET {base}/{ip}/json/`). Lookups are best
//! effort: any failure yields the default "Unknown" location and never fails
//! the surrounding request.

mod lookup;
mod types;

// Re-export public API
pub use lookup::GeoLocator;
pub use types::IpApiResponse;
