//! Configuration types and CLI options.
//!
//! This module defines the enums and structs used for command-line and
//! environment configuration. Every option can be supplied either as a flag or
//! through the environment variable named in its `env` attribute.

use std::net::SocketAddr;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::config::constants::{
    DEFAULT_DATABASE_NAME, DEFAULT_GEO_API_URL, DEFAULT_LISTEN_ADDR, DEFAULT_SMTP_HOST,
    DEFAULT_SMTP_PORT, EMAIL_TIMEOUT_MS, GEO_TIMEOUT_MS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration.
///
/// Parsed from the command line and environment by the binary, or constructed
/// directly by library users and tests.
///
/// # Examples
///
/// ```no_run
/// use retirement_survey::Config;
///
/// let config = Config {
///     mongodb_uri: Some("mongodb://localhost:27017/survey".to_string()),
///     notification_email: Some("ops@example.com".to_string()),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "retirement_survey", version, about)]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "LISTEN_ADDR", default_value = DEFAULT_LISTEN_ADDR)]
    pub listen: SocketAddr,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// MongoDB connection string. Submissions fail while this is unset.
    #[arg(long, env = "MONGODB_URI")]
    pub mongodb_uri: Option<String>,

    /// Database used when the connection string does not name one
    #[arg(long, env = "MONGODB_DATABASE", default_value = DEFAULT_DATABASE_NAME)]
    pub database_name: String,

    /// SMTP relay host
    #[arg(long, env = "SMTP_HOST", default_value = DEFAULT_SMTP_HOST)]
    pub smtp_host: String,

    /// SMTP relay port
    #[arg(long, env = "SMTP_PORT", default_value_t = DEFAULT_SMTP_PORT)]
    pub smtp_port: u16,

    /// Use implicit TLS instead of opportunistic STARTTLS
    #[arg(
        long,
        env = "SMTP_SECURE",
        action = clap::ArgAction::Set,
        value_parser = clap::builder::BoolishValueParser::new(),
        default_value_t = false
    )]
    pub smtp_secure: bool,

    /// SMTP username
    #[arg(long, env = "SMTP_USER")]
    pub smtp_user: Option<String>,

    /// SMTP password
    #[arg(long, env = "SMTP_PASSWORD", hide_env_values = true)]
    pub smtp_password: Option<String>,

    /// Sender address for outgoing mail
    #[arg(long, env = "SMTP_FROM")]
    pub smtp_from: Option<String>,

    /// Operator address that receives notifications
    #[arg(long, env = "NOTIFICATION_EMAIL")]
    pub notification_email: Option<String>,

    /// Base URL of the IP geolocation service
    #[arg(long, env = "GEO_API_URL", default_value = DEFAULT_GEO_API_URL)]
    pub geo_api_url: String,

    /// Geolocation lookup timeout in milliseconds
    #[arg(long, env = "GEO_TIMEOUT_MS", default_value_t = GEO_TIMEOUT_MS)]
    pub geo_timeout_ms: u64,

    /// Notification email timeout in milliseconds
    #[arg(long, env = "EMAIL_TIMEOUT_MS", default_value_t = EMAIL_TIMEOUT_MS)]
    pub email_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN_ADDR
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 3000))),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            mongodb_uri: None,
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            smtp_host: DEFAULT_SMTP_HOST.to_string(),
            smtp_port: DEFAULT_SMTP_PORT,
            smtp_secure: false,
            smtp_user: None,
            smtp_password: None,
            smtp_from: None,
            notification_email: None,
            geo_api_url: DEFAULT_GEO_API_URL.to_string(),
            geo_timeout_ms: GEO_TIMEOUT_MS,
            email_timeout_ms: EMAIL_TIMEOUT_MS,
        }
    }
}

/// A configuration value that cannot be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending option
    pub field: &'static str,
    /// What is wrong and what is expected instead
    pub message: String,
}

impl ConfigValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl Config {
    /// Checks option values that would make the service unusable.
    ///
    /// A missing database URI is not an error here: the server
    /// still starts so the email diagnostic endpoint stays available, and each
    /// submission reports the missing configuration instead.
    ///
    /// # Errors
    ///
    /// Returns the first invalid option found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.smtp_port == 0 {
            return Err(ConfigValidationError::new(
                "smtp_port",
                "must be greater than 0",
            ));
        }
        if self.geo_timeout_ms == 0 {
            return Err(ConfigValidationError::new(
                "geo_timeout_ms",
                "must be greater than 0 (milliseconds)",
            ));
        }
        if self.email_timeout_ms == 0 {
            return Err(ConfigValidationError::new(
                "email_timeout_ms",
                "must be greater than 0 (milliseconds)",
            ));
        }
        if self.database_name.trim().is_empty() {
            return Err(ConfigValidationError::new(
                "database_name",
                "must not be empty",
            ));
        }

        match url::Url::parse(&self.geo_api_url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            Ok(parsed) => {
                return Err(ConfigValidationError::new(
                    "geo_api_url",
                    format!("unsupported scheme '{}', expected http or https", parsed.scheme()),
                ))
            }
            Err(e) => {
                return Err(ConfigValidationError::new(
                    "geo_api_url",
                    format!("not a valid URL ({e}), expected e.g. {DEFAULT_GEO_API_URL}"),
                ))
            }
        }

        Ok(())
    }

    /// Timeout applied to each geolocation lookup.
    pub fn geo_timeout(&self) -> Duration {
        Duration::from_millis(self.geo_timeout_ms)
    }

    /// Timeout applied to each outgoing email.
    pub fn email_timeout(&self) -> Duration {
        Duration::from_millis(self.email_timeout_ms)
    }
}
