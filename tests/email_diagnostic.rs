//! End-to-end tests for `GET /api/test`.

mod helpers;

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{json, Value};

use helpers::{spawn_app, AppOptions, RecordingNotifier};
use retirement_survey::notification::EmailFormat;

#[tokio::test]
async fn test_diagnostic_email_success() {
    let notifier = Arc::new(RecordingNotifier::default());
    let app = spawn_app(AppOptions {
        notifier: notifier.clone(),
        ..Default::default()
    })
    .await;

    let response = app.client.get(app.url("/api/test")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "status": "success",
            "message": "Email configuration test successful",
            "details": {"email": "Email sent successfully"}
        })
    );

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Test Email from Retirement Survey App");
    assert_eq!(sent[0].format, EmailFormat::Text);
    assert!(sent[0].body.contains("Time sent:"));
}

#[tokio::test]
async fn test_diagnostic_email_failure() {
    let app = spawn_app(AppOptions {
        notifier: Arc::new(RecordingNotifier::failing("authentication failed")),
        ..Default::default()
    })
    .await;

    let response = app.client.get(app.url("/api/test")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"status": "error", "message": "SMTP error: authentication failed"})
    );
}

#[tokio::test]
async fn test_diagnostic_works_without_database() {
    let notifier = Arc::new(RecordingNotifier::default());
    let app = spawn_app(AppOptions {
        store: None,
        notifier: notifier.clone(),
        ..Default::default()
    })
    .await;

    let response = app.client.get(app.url("/api/test")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(notifier.sent().len(), 1);
}
