//! Error handling.
//!
//! Error types are split by where they originate:
//! - **Initialization**: logger, HTTP client, SMTP transport, database client
//! - **Database**: missing configuration and driver failures
//! - **Notification**: address, template, transport and timeout failures
//! - **Submission**: everything that fails a survey request
//!
//! Geolocation has no error type of its own: lookups that fail are logged and
//! replaced with the default location.

mod types;

// Re-export public API
pub use types::{DatabaseError, InitializationError, NotificationError, SubmissionError};

use std::error::Error;

/// Renders `err` and every `source()` below it, joined with `: `.
///
/// A cause whose text is already part of the rendering so far is skipped, so
/// wrappers that embed their source (`Database error: {0}`) are not repeated.
pub fn error_chain(err: &(dyn Error + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !rendered.contains(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        source = cause.source();
    }
    rendered
}
