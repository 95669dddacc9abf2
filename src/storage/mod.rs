// storage/mod.rs
// Survey persistence

pub mod insert;
pub mod migrations;
pub mod models;
pub mod pool;

use async_trait::async_trait;

use crate::error_handling::DatabaseError;
use crate::models::SurveyRecord;

// Re-export commonly used items
pub use migrations::run_migrations;
pub use models::{GeoLocationDocument, SurveyDocument};
pub use pool::{init_store, MongoStore};

/// Write-once storage for survey records.
///
/// Records are only ever appended; there is no update or delete path.
#[async_trait]
pub trait SurveyStore: Send + Sync {
    /// Verifies the store can accept writes.
    ///
    /// Runs concurrently with the geolocation lookup at the start of each
    /// submission. Implementations should make repeated calls cheap.
    async fn ensure_ready(&self) -> Result<(), DatabaseError>;

    /// Stores `record` as a new document and returns its identifier.
    async fn insert_survey(&self, record: &SurveyRecord) -> Result<String, DatabaseError>;
}
