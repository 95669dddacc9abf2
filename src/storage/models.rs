// storage/models.rs
// Document shapes stored in MongoDB

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime as BsonDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{GeoLocation, SurveyRecord};

/// Embedded location sub-document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocationDocument {
    pub country: String,
    pub city: String,
    pub region: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<&GeoLocation> for GeoLocationDocument {
    fn from(location: &GeoLocation) -> Self {
        Self {
            country: location.country.clone(),
            city: location.city.clone(),
            region: location.region.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
        }
    }
}

/// A survey response as stored in the `surveyresponses` collection.
///
/// Field names are camelCase to match the documents written by earlier
/// versions of the site. `createdAt` and `updatedAt` are stamped at insert
/// time; nothing in the service updates a stored document afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub help_request: String,
    pub interested_countries: Vec<String>,
    pub desired_information: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_comments: Option<String>,
    pub ip_address: String,
    pub geo_location: GeoLocationDocument,
    pub submitted_at: BsonDateTime,
    pub created_at: BsonDateTime,
    pub updated_at: BsonDateTime,
}

fn to_bson_datetime(value: DateTime<Utc>) -> BsonDateTime {
    BsonDateTime::from_millis(value.timestamp_millis())
}

impl SurveyDocument {
    /// Builds the document for `record`, stamping creation time `now`.
    pub fn from_record(record: &SurveyRecord, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            email: record.email.clone(),
            help_request: record.help_request.clone(),
            interested_countries: record.interested_countries.clone(),
            desired_information: record.desired_information.clone(),
            additional_comments: record.additional_comments.clone(),
            ip_address: record.ip_address.clone(),
            geo_location: GeoLocationDocument::from(&record.geo_location),
            submitted_at: to_bson_datetime(record.submitted_at),
            created_at: to_bson_datetime(now),
            updated_at: to_bson_datetime(now),
        }
    }
}
