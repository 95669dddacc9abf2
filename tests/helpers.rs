// Shared test helpers for spinning up the survey server against fakes.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use retirement_survey::error_handling::{DatabaseError, NotificationError};
use retirement_survey::geoip::GeoLocator;
use retirement_survey::notification::{Notifier, OutgoingEmail};
use retirement_survey::storage::SurveyStore;
use retirement_survey::{serve_with_shutdown, AppState, SurveyRecord, SurveyService};

/// In-memory store that keeps every inserted record.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<SurveyRecord>>,
    ready_calls: AtomicUsize,
    fail_insert: bool,
}

#[allow(dead_code)] // Used by other test files
impl MemoryStore {
    /// Every insert fails with a driver error.
    pub fn failing_inserts() -> Self {
        Self {
            fail_insert: true,
            ..Default::default()
        }
    }

    pub fn records(&self) -> Vec<SurveyRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn ready_calls(&self) -> usize {
        self.ready_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SurveyStore for MemoryStore {
    async fn ensure_ready(&self) -> Result<(), DatabaseError> {
        self.ready_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn insert_survey(&self, record: &SurveyRecord) -> Result<String, DatabaseError> {
        if self.fail_insert {
            return Err(mongodb::error::Error::custom("write failed").into());
        }
        let mut records = self.records.lock().unwrap();
        records.push(record.clone());
        Ok(format!("{:024x}", records.len()))
    }
}

/// Notifier that records emails instead of sending them.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<OutgoingEmail>>,
    failure: Option<String>,
    delay: Option<Duration>,
}

#[allow(dead_code)] // Used by other test files
impl RecordingNotifier {
    /// Every send fails with an SMTP error carrying `reason`.
    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Default::default()
        }
    }

    /// Every send takes `delay` before succeeding.
    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, email: OutgoingEmail) -> Result<(), NotificationError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(reason) = &self.failure {
            return Err(NotificationError::TransportError(reason.clone()));
        }
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

/// A running server bound to an ephemeral port.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    shutdown: Option<oneshot::Sender<()>>,
}

#[allow(dead_code)] // Used by other test files
impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// Options for [`spawn_app`].
pub struct AppOptions {
    pub store: Option<Arc<MemoryStore>>,
    pub notifier: Arc<RecordingNotifier>,
    pub geo_base_url: String,
    pub geo_timeout: Duration,
    pub email_timeout: Duration,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            store: Some(Arc::new(MemoryStore::default())),
            notifier: Arc::new(RecordingNotifier::default()),
            // Nothing listens on the discard port; lookups fail immediately
            geo_base_url: "http://127.0.0.1:9".to_string(),
            geo_timeout: Duration::from_secs(3),
            email_timeout: Duration::from_secs(5),
        }
    }
}

/// Starts the server on 127.0.0.1 with the given collaborators.
pub async fn spawn_app(options: AppOptions) -> TestApp {
    let locator = GeoLocator::new(
        Arc::new(reqwest::Client::new()),
        &options.geo_base_url,
        options.geo_timeout,
    );
    let service = SurveyService::new(
        options.store.map(|s| s as Arc<dyn SurveyStore>),
        options.notifier,
        locator,
        options.email_timeout,
    );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no local address");

    let (tx, rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        let shutdown = async {
            let _ = rx.await;
        };
        if let Err(e) = serve_with_shutdown(listener, AppState::new(service), shutdown).await {
            eprintln!("test server error: {e:#}");
        }
    });

    TestApp {
        addr,
        client: reqwest::Client::new(),
        shutdown: Some(tx),
    }
}

/// A valid submission body.
#[allow(dead_code)] // Used by other test files
pub fn survey_body() -> serde_json::Value {
    serde_json::json!({
        "email": "jane@example.com",
        "helpRequest": "I want to retire somewhere but I do not know where",
        "interestedCountries": ["Spain", "Portugal"],
        "desiredInformation": ["Safety", "Weather"],
        "additionalComments": "Somewhere near the sea"
    })
}
