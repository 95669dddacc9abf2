//! Submission validation.
//!
//! Enforces what the stored schema requires: a well-formed email, a help
//! request, and at least one country and topic drawn from the fixed lists.
//! The form's five-item and hundred-word limits are advisory and not checked.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error_handling::SubmissionError;
use crate::models::{Country, InformationTopic, SurveySubmission};

/// `local@domain.tld`, no whitespace, exactly one `@`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

fn invalid(message: impl Into<String>) -> SubmissionError {
    SubmissionError::InvalidPayload(message.into())
}

/// Returns true if `email` has the basic `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks a submission before any external call is made.
///
/// # Errors
///
/// Returns `SubmissionError::InvalidPayload` naming the first offending field.
pub fn validate_submission(submission: &SurveySubmission) -> Result<(), SubmissionError> {
    if submission.email.trim().is_empty() {
        return Err(invalid("email is required"));
    }
    if !is_valid_email(&submission.email) {
        return Err(invalid(format!(
            "email '{}' is not a valid address",
            submission.email
        )));
    }
    if submission.help_request.trim().is_empty() {
        return Err(invalid("helpRequest is required"));
    }

    if submission.interested_countries.is_empty() {
        return Err(invalid("interestedCountries must contain at least one country"));
    }
    if let Some(unknown) = submission
        .interested_countries
        .iter()
        .find(|name| Country::from_str(name).is_err())
    {
        return Err(invalid(format!(
            "'{unknown}' is not a supported value for interestedCountries"
        )));
    }

    if submission.desired_information.is_empty() {
        return Err(invalid("desiredInformation must contain at least one topic"));
    }
    if let Some(unknown) = submission
        .desired_information
        .iter()
        .find(|topic| InformationTopic::from_str(topic).is_err())
    {
        return Err(invalid(format!(
            "'{unknown}' is not a supported value for desiredInformation"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> SurveySubmission {
        SurveySubmission {
            email: "jane@example.com".to_string(),
            help_request: "I want to retire somewhere but I do not know where".to_string(),
            interested_countries: vec!["Spain".to_string(), "Czech Republic".to_string()],
            desired_information: vec!["Safety".to_string(), "LGBTQ+ friendly".to_string()],
            additional_comments: None,
        }
    }

    fn message(err: SubmissionError) -> String {
        match err {
            SubmissionError::InvalidPayload(msg) => msg,
            other => panic!("expected InvalidPayload, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(validate_submission(&submission()).is_ok());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("jane.doe+survey@mail.example.co.uk"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane example@example.com"));
        assert!(!is_valid_email("jane@@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_missing_email() {
        let mut s = submission();
        s.email = "  ".to_string();
        assert_eq!(message(validate_submission(&s).unwrap_err()), "email is required");
    }

    #[test]
    fn test_malformed_email() {
        let mut s = submission();
        s.email = "jane.example.com".to_string();
        assert!(message(validate_submission(&s).unwrap_err()).contains("jane.example.com"));
    }

    #[test]
    fn test_missing_help_request() {
        let mut s = submission();
        s.help_request = String::new();
        assert_eq!(
            message(validate_submission(&s).unwrap_err()),
            "helpRequest is required"
        );
    }

    #[test]
    fn test_countries_required_and_enumerated() {
        let mut s = submission();
        s.interested_countries.clear();
        assert!(message(validate_submission(&s).unwrap_err()).contains("interestedCountries"));

        let mut s = submission();
        s.interested_countries.push("Switzerland".to_string());
        assert!(message(validate_submission(&s).unwrap_err()).contains("'Switzerland'"));
    }

    #[test]
    fn test_topics_required_and_enumerated() {
        let mut s = submission();
        s.desired_information.clear();
        assert!(message(validate_submission(&s).unwrap_err()).contains("desiredInformation"));

        let mut s = submission();
        s.desired_information = vec!["Nightlife".to_string()];
        assert!(message(validate_submission(&s).unwrap_err()).contains("'Nightlife'"));
    }

    #[test]
    fn test_selection_caps_not_enforced() {
        let mut s = submission();
        s.interested_countries = ["Austria", "Belgium", "Croatia", "Cyprus", "Malta", "Spain", "Italy"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        s.help_request = "word ".repeat(250);
        assert!(validate_submission(&s).is_ok());
    }
}
