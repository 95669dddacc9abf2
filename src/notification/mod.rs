//! Notification email.
//!
//! Renders the fixed templates and delivers them through a [`Notifier`].
//! Every send is bounded by a deadline; running out of time is reported as
//! a failure like any SMTP error.

mod smtp;
mod template;

use std::time::Duration;

use async_trait::async_trait;
use log::error;

use crate::error_handling::NotificationError;

// Re-export public API
pub use smtp::SmtpNotifier;
pub use template::{format_send_time, render_survey_notification, render_test_email};

/// Body format of an outgoing email.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailFormat {
    Html,
    Text,
}

/// A rendered email ready for delivery to the operator address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub subject: String,
    pub format: EmailFormat,
    pub body: String,
}

/// Delivers emails to the configured operator address.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `email`. Implementations do not enforce a deadline themselves.
    async fn send(&self, email: OutgoingEmail) -> Result<(), NotificationError>;
}

/// Sends `email`, abandoning the attempt after `timeout`.
///
/// # Errors
///
/// Returns the notifier's error, or `NotificationError::Timeout` on expiry.
pub async fn send_with_timeout(
    notifier: &dyn Notifier,
    email: OutgoingEmail,
    timeout: Duration,
) -> Result<(), NotificationError> {
    match tokio::time::timeout(timeout, notifier.send(email)).await {
        Ok(result) => result,
        Err(_) => {
            error!("Email sending timed out after {}ms", timeout.as_millis());
            Err(NotificationError::Timeout(timeout))
        }
    }
}
