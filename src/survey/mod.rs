//! Survey submission pipeline.
//!
//! A submission is validated, geolocated while the store is readied, stored,
//! and finally announced to the operator by email. Geolocation never fails a
//! submission; storage and email failures always do.

mod validation;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use log::{error, info};

use crate::error_handling::{error_chain, DatabaseError, NotificationError, SubmissionError};
use crate::geoip::GeoLocator;
use crate::models::{SurveyRecord, SurveySubmission};
use crate::notification::{
    render_survey_notification, render_test_email, send_with_timeout, Notifier,
};
use crate::storage::SurveyStore;

pub use validation::{is_valid_email, validate_submission};

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    /// Identifier assigned by the store
    pub id: String,
    /// The record as stored
    pub record: SurveyRecord,
}

/// Runs submissions and the email diagnostic against injected collaborators.
pub struct SurveyService {
    store: Option<Arc<dyn SurveyStore>>,
    notifier: Arc<dyn Notifier>,
    locator: GeoLocator,
    email_timeout: Duration,
}

impl SurveyService {
    /// `store` is `None` when no connection string is configured; submissions
    /// then fail while the email diagnostic keeps working.
    pub fn new(
        store: Option<Arc<dyn SurveyStore>>,
        notifier: Arc<dyn Notifier>,
        locator: GeoLocator,
        email_timeout: Duration,
    ) -> Self {
        Self {
            store,
            notifier,
            locator,
            email_timeout,
        }
    }

    /// Stores `submission` from `ip_address` and notifies the operator.
    ///
    /// The record is not removed if the notification fails afterwards, so an
    /// error here does not imply nothing was stored.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError` for invalid input, a missing or failing
    /// store, or a failed or late notification.
    pub async fn submit(
        &self,
        submission: SurveySubmission,
        ip_address: &str,
    ) -> Result<SubmissionOutcome, SubmissionError> {
        validate_submission(&submission)?;

        let store = self.store.as_ref().ok_or(DatabaseError::NotConfigured)?;

        let (geo_location, ready) =
            tokio::join!(self.locator.locate(ip_address), store.ensure_ready());
        ready?;

        let record = SurveyRecord::new(
            submission,
            ip_address.to_string(),
            geo_location,
            Utc::now(),
        );

        let id = store.insert_survey(&record).await?;
        info!("Stored survey response {} from {}", id, record.ip_address);

        if let Err(e) = self.notify(&record).await {
            error!(
                "Survey response {id} was stored but the notification failed: {}",
                error_chain(&e)
            );
            return Err(e.into());
        }

        Ok(SubmissionOutcome { id, record })
    }

    async fn notify(&self, record: &SurveyRecord) -> Result<(), NotificationError> {
        let email = render_survey_notification(record, Utc::now())?;
        send_with_timeout(self.notifier.as_ref(), email, self.email_timeout).await?;
        info!("Notification sent for survey response from {}", record.email);
        Ok(())
    }

    /// Sends the plain-text diagnostic email.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError` if the email could not be sent in time.
    pub async fn send_test_email(&self) -> Result<(), NotificationError> {
        let email = render_test_email(Utc::now())?;
        send_with_timeout(self.notifier.as_ref(), email, self.email_timeout).await?;
        info!("Test email sent");
        Ok(())
    }
}
