//! Survey submission handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use super::super::types::{AppState, SubmissionResponse};
use crate::config::{HEADER_X_FORWARDED_FOR, SUBMISSION_SUCCESS_MESSAGE, UNKNOWN_IP};
use crate::error_handling::SubmissionError;
use crate::models::SurveySubmission;

/// Caller address as reported by the proxy, taken verbatim.
pub fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get(HEADER_X_FORWARDED_FOR)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(UNKNOWN_IP)
        .to_string()
}

/// `POST /api/survey`
pub async fn survey_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<SurveySubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmissionResponse>), SubmissionError> {
    let Json(submission) =
        payload.map_err(|rejection| SubmissionError::MalformedPayload(rejection.body_text()))?;

    let ip_address = client_ip(&headers);
    log::info!("Survey submission received from {}", ip_address);

    state.service.submit(submission, &ip_address).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmissionResponse {
            message: SUBMISSION_SUCCESS_MESSAGE,
        }),
    ))
}
