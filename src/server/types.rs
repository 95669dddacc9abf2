//! Server data structures.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde::Serialize;

use crate::config::SUBMISSION_FAILURE_MESSAGE;
use crate::error_handling::{error_chain, SubmissionError};
use crate::survey::SurveyService;

/// Shared state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SurveyService>,
}

impl AppState {
    pub fn new(service: SurveyService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// JSON response for an accepted submission
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub message: &'static str,
}

/// JSON response for a failed submission
#[derive(Debug, Serialize)]
pub struct SubmissionErrorResponse {
    pub error: &'static str,
    pub details: String,
}

/// Outcome label used by the email diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticStatus {
    Success,
    Error,
}

#[derive(Debug, Serialize)]
pub struct DiagnosticDetails {
    pub email: &'static str,
}

/// JSON response for `/api/test`
#[derive(Debug, Serialize)]
pub struct DiagnosticResponse {
    pub status: DiagnosticStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<DiagnosticDetails>,
}

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        error!("Survey submission failed: {}", error_chain(&self));
        let body = SubmissionErrorResponse {
            error: SUBMISSION_FAILURE_MESSAGE,
            details: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
