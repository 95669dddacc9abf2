//! Email templates.
//!
//! The submission notification is HTML with every user-supplied value
//! escaped; the diagnostic email is plain text.

use askama::Template;
use chrono::{DateTime, Utc};

use super::{EmailFormat, OutgoingEmail};
use crate::config::{SUBMISSION_EMAIL_SUBJECT, TEST_EMAIL_SUBJECT};
use crate::error_handling::NotificationError;
use crate::models::SurveyRecord;

#[derive(Template)]
#[template(path = "survey_notification.html")]
struct SurveyNotificationTemplate<'a> {
    email: &'a str,
    help_request: &'a str,
    countries: String,
    topics: String,
    comments: &'a str,
    ip_address: &'a str,
    city: &'a str,
    country: &'a str,
    latitude: String,
    longitude: String,
    sent_at: String,
}

#[derive(Template)]
#[template(path = "test_email.txt")]
struct TestEmailTemplate {
    sent_at: String,
}

/// Formats a send time the way US-locale clients display it, e.g.
/// `3/1/2025, 2:05:09 PM UTC`.
pub fn format_send_time(sent_at: DateTime<Utc>) -> String {
    sent_at.format("%-m/%-d/%Y, %-I:%M:%S %p UTC").to_string()
}

fn format_coordinate(value: Option<f64>) -> String {
    value.map_or_else(|| "null".to_string(), |v| v.to_string())
}

/// Renders the operator notification for a stored submission.
///
/// # Errors
///
/// Returns `NotificationError::TemplateError` if rendering fails.
pub fn render_survey_notification(
    record: &SurveyRecord,
    sent_at: DateTime<Utc>,
) -> Result<OutgoingEmail, NotificationError> {
    let template = SurveyNotificationTemplate {
        email: &record.email,
        help_request: &record.help_request,
        countries: record.interested_countries.join(", "),
        topics: record.desired_information.join(", "),
        comments: record.comments_or_placeholder(),
        ip_address: &record.ip_address,
        city: &record.geo_location.city,
        country: &record.geo_location.country,
        latitude: format_coordinate(record.geo_location.latitude),
        longitude: format_coordinate(record.geo_location.longitude),
        sent_at: format_send_time(sent_at),
    };

    Ok(OutgoingEmail {
        subject: SUBMISSION_EMAIL_SUBJECT.to_string(),
        format: EmailFormat::Html,
        body: template.render()?,
    })
}

/// Renders the diagnostic email sent by `GET /api/test`.
///
/// # Errors
///
/// Returns `NotificationError::TemplateError` if rendering fails.
pub fn render_test_email(sent_at: DateTime<Utc>) -> Result<OutgoingEmail, NotificationError> {
    let template = TestEmailTemplate {
        sent_at: format_send_time(sent_at),
    };

    Ok(OutgoingEmail {
        subject: TEST_EMAIL_SUBJECT.to_string(),
        format: EmailFormat::Text,
        body: template.render()?,
    })
}
