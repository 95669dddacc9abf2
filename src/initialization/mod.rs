//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - Logger
//! - Geolocation HTTP client
//! - TLS crypto provider
//!
//! The MongoDB store and the SMTP transport are built by their own modules
//! (`storage::init_store`, `notification::SmtpNotifier::from_config`).

mod client;
mod logger;

use rustls::crypto::{ring::default_provider, CryptoProvider};

// Re-export public API
pub use client::init_geo_client;
pub use logger::init_logger_with;

/// Initializes the crypto provider for TLS operations.
///
/// Configures the global crypto provider for `rustls`. This must be called before
/// any TLS connections are established (geolocation over HTTPS, MongoDB with
/// TLS, SMTP with STARTTLS or implicit TLS).
pub fn init_crypto_provider() {
    // The return value is ignored because reinstalling the provider is harmless
    let _ = CryptoProvider::install_default(default_provider());
}
