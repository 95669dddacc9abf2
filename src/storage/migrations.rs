// storage/migrations.rs
// Index management for the survey collection

use log::debug;
use mongodb::bson::doc;
use mongodb::{Collection, IndexModel};

use super::models::SurveyDocument;

/// Index key specifications for the survey collection.
///
/// Lookups by email, by origin country, and newest-first listings. None of
/// them is unique: the same person may submit any number of times.
pub fn survey_indexes() -> Vec<IndexModel> {
    vec![
        IndexModel::builder().keys(doc! { "email": 1 }).build(),
        IndexModel::builder()
            .keys(doc! { "geoLocation.country": 1 })
            .build(),
        IndexModel::builder().keys(doc! { "submittedAt": -1 }).build(),
    ]
}

/// Creates the survey indexes. Existing identical indexes are left as they are.
pub async fn run_migrations(
    collection: &Collection<SurveyDocument>,
) -> Result<(), mongodb::error::Error> {
    let result = collection.create_indexes(survey_indexes()).await?;
    debug!("Survey indexes ensured: {:?}", result.index_names);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survey_indexes_are_not_unique() {
        let indexes = survey_indexes();
        assert_eq!(indexes.len(), 3);
        for index in &indexes {
            let unique = index
                .options
                .as_ref()
                .and_then(|options| options.unique)
                .unwrap_or(false);
            assert!(!unique, "duplicate submissions must be accepted");
        }
        assert_eq!(indexes[2].keys, doc! { "submittedAt": -1 });
    }
}
