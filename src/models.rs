//! Survey data types.
//!
//! `SurveySubmission` is what the client posts; `SurveyRecord` is the enriched
//! form that gets stored and mailed. Country and topic names are fixed
//! enumerations matching the options offered by the survey form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString};

use crate::config::UNKNOWN_LOCATION;

/// EU countries a respondent can pick as a retirement destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, EnumIter)]
pub enum Country {
    Austria,
    Belgium,
    Bulgaria,
    Croatia,
    Cyprus,
    #[strum(serialize = "Czech Republic")]
    CzechRepublic,
    Denmark,
    Estonia,
    Finland,
    France,
    Germany,
    Greece,
    Hungary,
    Ireland,
    Italy,
    Latvia,
    Lithuania,
    Luxembourg,
    Malta,
    Netherlands,
    Poland,
    Portugal,
    Romania,
    Slovakia,
    Slovenia,
    Spain,
    Sweden,
}

/// Topics a respondent can ask to be informed about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, EnumIter)]
pub enum InformationTopic {
    Safety,
    #[strum(serialize = "Living expenses")]
    LivingExpenses,
    Rent,
    #[strum(serialize = "House prices")]
    HousePrices,
    #[strum(serialize = "Healthcare quality")]
    HealthcareQuality,
    #[strum(serialize = "Transport to airport")]
    TransportToAirport,
    Internet,
    Activities,
    #[strum(serialize = "Air quality")]
    AirQuality,
    #[strum(serialize = "English speaking")]
    EnglishSpeaking,
    Walkability,
    #[strum(serialize = "Traffic safety")]
    TrafficSafety,
    #[strum(serialize = "Friendly to foreigners")]
    FriendlyToForeigners,
    #[strum(serialize = "LGBTQ+ friendly")]
    LgbtqFriendly,
    Weather,
}

/// Survey form as posted by the client.
///
/// Missing fields default to empty so that they are reported by validation
/// rather than as a malformed body.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySubmission {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub help_request: String,
    #[serde(default)]
    pub interested_countries: Vec<String>,
    #[serde(default)]
    pub desired_information: Vec<String>,
    #[serde(default)]
    pub additional_comments: Option<String>,
}

/// Approximate origin of a submission.
///
/// Unresolved string fields hold `"Unknown"`; unresolved coordinates are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLocation {
    pub country: String,
    pub city: String,
    pub region: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Default for GeoLocation {
    fn default() -> Self {
        Self {
            country: UNKNOWN_LOCATION.to_string(),
            city: UNKNOWN_LOCATION.to_string(),
            region: UNKNOWN_LOCATION.to_string(),
            latitude: None,
            longitude: None,
        }
    }
}

impl GeoLocation {
    /// True when every field still holds its default.
    pub fn is_unknown(&self) -> bool {
        *self == Self::default()
    }
}

/// A submission enriched with request metadata, ready to store.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyRecord {
    pub email: String,
    pub help_request: String,
    pub interested_countries: Vec<String>,
    pub desired_information: Vec<String>,
    pub additional_comments: Option<String>,
    pub ip_address: String,
    pub geo_location: GeoLocation,
    pub submitted_at: DateTime<Utc>,
}

impl SurveyRecord {
    /// Combines the posted form with the caller's address and location.
    pub fn new(
        submission: SurveySubmission,
        ip_address: String,
        geo_location: GeoLocation,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            email: submission.email,
            help_request: submission.help_request,
            interested_countries: submission.interested_countries,
            desired_information: submission.desired_information,
            additional_comments: submission.additional_comments,
            ip_address,
            geo_location,
            submitted_at,
        }
    }

    /// Comments for display, with blank comments treated as absent.
    pub fn comments_or_placeholder(&self) -> &str {
        match self.additional_comments.as_deref().map(str::trim) {
            Some(comments) if !comments.is_empty() => comments,
            _ => crate::config::NO_COMMENTS_PLACEHOLDER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_country_names_round_trip() {
        assert_eq!(Country::iter().count(), 27);
        for country in Country::iter() {
            let name = country.as_ref();
            assert_eq!(Country::from_str(name).ok(), Some(country));
        }
        assert_eq!(Country::CzechRepublic.as_ref(), "Czech Republic");
    }

    #[test]
    fn test_topic_names_use_form_labels() {
        assert_eq!(InformationTopic::iter().count(), 15);
        assert_eq!(
            InformationTopic::from_str("LGBTQ+ friendly").ok(),
            Some(InformationTopic::LgbtqFriendly)
        );
        assert_eq!(
            InformationTopic::from_str("Transport to airport").ok(),
            Some(InformationTopic::TransportToAirport)
        );
        // Variant identifiers are not accepted in place of labels
        assert!(InformationTopic::from_str("LivingExpenses").is_err());
    }

    #[test]
    fn test_unknown_country_rejected() {
        assert!(Country::from_str("Norway").is_err());
        assert!(Country::from_str("spain").is_err());
    }

    #[test]
    fn test_submission_deserializes_camel_case() {
        let json = r#"{
            "email": "jane@example.com",
            "helpRequest": "Where should I retire?",
            "interestedCountries": ["Spain", "Portugal"],
            "desiredInformation": ["Safety"]
        }"#;
        let submission: SurveySubmission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.help_request, "Where should I retire?");
        assert_eq!(submission.interested_countries, vec!["Spain", "Portugal"]);
        assert_eq!(submission.additional_comments, None);
    }

    #[test]
    fn test_default_location_is_unknown() {
        let location = GeoLocation::default();
        assert_eq!(location.country, "Unknown");
        assert_eq!(location.city, "Unknown");
        assert_eq!(location.region, "Unknown");
        assert_eq!(location.latitude, None);
        assert!(location.is_unknown());
    }

    #[test]
    fn test_comments_placeholder() {
        let submission = SurveySubmission {
            email: "jane@example.com".to_string(),
            help_request: "help".to_string(),
            interested_countries: vec!["Spain".to_string()],
            desired_information: vec!["Safety".to_string()],
            additional_comments: Some("   ".to_string()),
        };
        let record = SurveyRecord::new(
            submission,
            "unknown".to_string(),
            GeoLocation::default(),
            Utc::now(),
        );
        assert_eq!(record.comments_or_placeholder(), "None provided");
    }
}
