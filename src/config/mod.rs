//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, collection names, response text)
//! - HTTP header name constants
//! - CLI/environment option types and validation

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, ConfigValidationError, LogFormat, LogLevel};
