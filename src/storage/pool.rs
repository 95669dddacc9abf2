//! Database client management.
//!
//! The MongoDB client is created once at startup and shared by every request.
//! Creating it only parses the connection string; the first request verifies
//! connectivity (see [`MongoStore::ensure_ready`](super::MongoStore)).

use log::{info, warn};
use mongodb::{Client, Collection, Database};
use tokio::sync::OnceCell;

use crate::config::{Config, SURVEY_COLLECTION};
use crate::error_handling::InitializationError;

use super::models::SurveyDocument;

/// MongoDB-backed survey store.
pub struct MongoStore {
    pub(super) database: Database,
    pub(super) collection: Collection<SurveyDocument>,
    /// Set once the server has answered a ping and indexes exist.
    pub(super) ready: OnceCell<()>,
}

impl MongoStore {
    /// Creates a store for `uri`.
    ///
    /// The database named in the URI path is used when present, otherwise
    /// `default_database`.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the connection string cannot be parsed or
    /// names an unresolvable SRV record.
    pub async fn connect(uri: &str, default_database: &str) -> Result<Self, mongodb::error::Error> {
        let client = Client::with_uri_str(uri).await?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(default_database));
        let collection = database.collection::<SurveyDocument>(SURVEY_COLLECTION);

        info!(
            "Using database '{}', collection '{}'",
            database.name(),
            SURVEY_COLLECTION
        );

        Ok(Self {
            database,
            collection,
            ready: OnceCell::new(),
        })
    }

    /// Name of the database in use.
    pub fn database_name(&self) -> &str {
        self.database.name()
    }
}

/// Initializes the survey store from configuration.
///
/// Returns `Ok(None)` when no connection string is configured; submissions
/// then fail with a configuration error while the rest of the service runs.
///
/// # Errors
///
/// Returns `InitializationError::DatabaseClientError` if a configured
/// connection string is invalid.
pub async fn init_store(config: &Config) -> Result<Option<MongoStore>, InitializationError> {
    match config.mongodb_uri.as_deref().map(str::trim) {
        Some(uri) if !uri.is_empty() => {
            let store = MongoStore::connect(uri, &config.database_name).await?;
            Ok(Some(store))
        }
        _ => {
            warn!("MONGODB_URI is not defined; survey submissions will fail until it is set");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_store_without_uri() {
        let config = Config::default();
        let store = init_store(&config).await.expect("missing URI is not an error");
        assert!(store.is_none());
    }

    #[tokio::test]
    async fn test_init_store_blank_uri() {
        let config = Config {
            mongodb_uri: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(init_store(&config).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_init_store_invalid_uri() {
        let config = Config {
            mongodb_uri: Some("postgres://localhost/db".to_string()),
            ..Default::default()
        };
        let result = init_store(&config).await;
        assert!(matches!(
            result,
            Err(InitializationError::DatabaseClientError(_))
        ));
    }

    #[tokio::test]
    async fn test_connect_uses_database_from_uri() {
        // Client creation parses the URI without contacting the server
        let store = MongoStore::connect("mongodb://127.0.0.1:27017/survey_prod", "fallback")
            .await
            .unwrap();
        assert_eq!(store.database_name(), "survey_prod");

        let store = MongoStore::connect("mongodb://127.0.0.1:27017", "fallback")
            .await
            .unwrap();
        assert_eq!(store.database_name(), "fallback");
    }
}
