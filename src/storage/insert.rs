//! Survey inserts.

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use mongodb::bson::doc;

use super::migrations::run_migrations;
use super::models::SurveyDocument;
use super::pool::MongoStore;
use super::SurveyStore;
use crate::error_handling::DatabaseError;
use crate::models::SurveyRecord;

#[async_trait]
impl SurveyStore for MongoStore {
    async fn ensure_ready(&self) -> Result<(), DatabaseError> {
        // get_or_try_init does not cache errors, so a failed check is retried
        // by the next request
        self.ready
            .get_or_try_init(|| async {
                self.database.run_command(doc! { "ping": 1 }).await?;
                run_migrations(&self.collection).await?;
                info!("MongoDB connected successfully");
                Ok::<(), mongodb::error::Error>(())
            })
            .await?;
        Ok(())
    }

    async fn insert_survey(&self, record: &SurveyRecord) -> Result<String, DatabaseError> {
        let document = SurveyDocument::from_record(record, Utc::now());
        let result = self.collection.insert_one(&document).await?;

        let id = match result.inserted_id.as_object_id() {
            Some(oid) => oid.to_hex(),
            None => result.inserted_id.to_string(),
        };
        debug!("Inserted survey document {}", id);
        Ok(id)
    }
}
