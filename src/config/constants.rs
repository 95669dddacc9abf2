//! Configuration constants.
//!
//! This module defines the defaults and fixed values used throughout the service,
//! including timeouts, collection names, and the text that appears in responses.

/// Default socket address the HTTP server binds to
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// Default MongoDB database name, used when the URI does not name one
pub const DEFAULT_DATABASE_NAME: &str = "retirement_survey";
/// Collection holding survey responses
pub const SURVEY_COLLECTION: &str = "surveyresponses";

/// Default base URL of the IP geolocation service
pub const DEFAULT_GEO_API_URL: &str = "https://ipapi.co";
/// Geolocation lookup timeout in milliseconds
pub const GEO_TIMEOUT_MS: u64 = 3000;
/// Notification email timeout in milliseconds
/// Expiry is reported the same way as an SMTP failure
pub const EMAIL_TIMEOUT_MS: u64 = 5000;

/// Default SMTP relay host
pub const DEFAULT_SMTP_HOST: &str = "localhost";
/// Default SMTP port (submission with STARTTLS)
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Sentinel stored when the caller IP is not known
pub const UNKNOWN_IP: &str = "unknown";
/// Sentinel stored for geolocation string fields that could not be resolved
pub const UNKNOWN_LOCATION: &str = "Unknown";
/// Shown in the notification email when no comments were given
pub const NO_COMMENTS_PLACEHOLDER: &str = "None provided";

/// User-Agent sent to the geolocation service
pub const USER_AGENT: &str = concat!("retirement_survey/", env!("CARGO_PKG_VERSION"));

// Email subjects
pub const SUBMISSION_EMAIL_SUBJECT: &str = "New Retirement Survey Response";
pub const TEST_EMAIL_SUBJECT: &str = "Test Email from Retirement Survey App";

// Response messages
pub const SUBMISSION_SUCCESS_MESSAGE: &str = "Survey response submitted successfully";
pub const SUBMISSION_FAILURE_MESSAGE: &str = "Failed to save survey response";
pub const TEST_EMAIL_SUCCESS_MESSAGE: &str = "Email configuration test successful";
pub const TEST_EMAIL_SENT_DETAIL: &str = "Email sent successfully";
