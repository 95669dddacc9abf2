//! Email diagnostic handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::super::types::{AppState, DiagnosticDetails, DiagnosticResponse, DiagnosticStatus};
use crate::config::{TEST_EMAIL_SENT_DETAIL, TEST_EMAIL_SUCCESS_MESSAGE};
use crate::error_handling::error_chain;

/// `GET /api/test`
pub async fn test_email_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<DiagnosticResponse>) {
    match state.service.send_test_email().await {
        Ok(()) => (
            StatusCode::OK,
            Json(DiagnosticResponse {
                status: DiagnosticStatus::Success,
                message: TEST_EMAIL_SUCCESS_MESSAGE.to_string(),
                details: Some(DiagnosticDetails {
                    email: TEST_EMAIL_SENT_DETAIL,
                }),
            }),
        ),
        Err(e) => {
            log::error!("Test email failed: {}", error_chain(&e));
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DiagnosticResponse {
                    status: DiagnosticStatus::Error,
                    message: e.to_string(),
                    details: None,
                }),
            )
        }
    }
}
