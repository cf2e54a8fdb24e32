//! Route handlers for the contact endpoint.

use super::AppState;
use crate::models::ContactSubmission;
use crate::services::SubmissionServiceError;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Success body returned once both emails are dispatched.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
    pub email_id: String,
}

/// Error body for every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Answer CORS preflight with an empty 200.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Handle a contact form submission.
///
/// POST /api/contact
///
/// Validates the payload, dispatches the notification and auto-reply
/// emails, and returns the notification receipt id on success.
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Response {
    let Json(submission) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::info!("Rejecting malformed request body: {}", rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Invalid request body".to_string(),
                    details: None,
                }),
            )
                .into_response();
        }
    };

    match state.service.process(submission).await {
        Ok(receipt) => (
            StatusCode::OK,
            Json(SubmissionResponse {
                success: true,
                message: "Your message has been sent. We will get back to you soon.".to_string(),
                email_id: receipt.id,
            }),
        )
            .into_response(),
        Err(SubmissionServiceError::Invalid(e)) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
                details: None,
            }),
        )
            .into_response(),
        Err(SubmissionServiceError::Dispatch(e)) => {
            tracing::error!("Submission dispatch failed: {}", e);
            let details = if state.config.expose_error_details() {
                Some(e.to_string())
            } else {
                None
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to send your message. Please try again later.".to_string(),
                    details,
                }),
            )
                .into_response()
        }
    }
}
