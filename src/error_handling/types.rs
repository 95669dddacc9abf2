//! Error type definitions.
//!
//! This module defines the error types used throughout the service. Each
//! external dependency gets its own enum so callers can tell a database
//! problem from a mail problem; the HTTP layer collapses them all into a
//! single failure response carrying the error's message.

use std::time::Duration;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the geolocation HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error building the SMTP transport (bad host or TLS parameters).
    #[error("SMTP transport initialization error: {0}")]
    SmtpTransportError(#[from] lettre::transport::smtp::Error),

    /// Error creating the MongoDB client (bad connection string).
    #[error("Database client initialization error: {0}")]
    DatabaseClientError(#[from] mongodb::error::Error),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// No connection string was configured.
    #[error("MONGODB_URI is not defined")]
    NotConfigured,

    /// The driver reported a failure (connection, authentication, write).
    #[error("Database error: {0}")]
    DriverError(#[from] mongodb::error::Error),
}

/// Error types for sending notification email.
#[derive(Error, Debug)]
pub enum NotificationError {
    /// A required address option was not configured.
    #[error("{0} is not defined")]
    MissingAddress(&'static str),

    /// A configured address could not be parsed.
    #[error("Invalid {field} address '{value}': {reason}")]
    InvalidAddress {
        /// Option the address came from
        field: &'static str,
        /// The rejected value
        value: String,
        /// Parser message
        reason: String,
    },

    /// The email template failed to render.
    #[error("Failed to render email template: {0}")]
    TemplateError(#[from] askama::Error),

    /// The message could not be assembled.
    #[error("Failed to build email: {0}")]
    MessageError(#[from] lettre::error::Error),

    /// The SMTP server rejected the message or could not be reached.
    #[error("SMTP error: {0}")]
    TransportError(String),

    /// Sending did not finish within the configured deadline.
    #[error("Email sending timeout after {}ms", .0.as_millis())]
    Timeout(Duration),
}

/// Error types for a survey submission.
///
/// Every variant is fatal to the request. Geolocation failures never appear
/// here because they are replaced with the default location.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// The request body was not a valid survey JSON document.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// The body parsed but a field failed validation.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// The record could not be stored.
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// The record was stored but the notification was not sent.
    #[error(transparent)]
    Notification(#[from] NotificationError),
}
