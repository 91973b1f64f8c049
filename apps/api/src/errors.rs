use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::parsing::ParseError;

/// Shown when the upstream model is still overloaded after every retry.
pub const SERVICE_BUSY_MESSAGE: &str =
    "The AI service is currently busy. Please try again in a few moments.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("AI service busy: {0}")]
    ServiceBusy(String),

    #[error("Upstream response format error: {0}")]
    UpstreamFormat(#[from] ParseError),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Maps a client failure for `feature` onto the HTTP taxonomy:
    /// transient overloads become `ServiceBusy`, everything else a generic `Llm` error.
    pub fn from_llm(feature: &str, error: LlmError) -> Self {
        match error {
            LlmError::Cancelled => AppError::Cancelled,
            e if e.is_transient() => AppError::ServiceBusy(format!("{feature}: {e}")),
            e => AppError::Llm(format!("{feature} failed: {e}")),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::ServiceBusy(msg) => {
                tracing::warn!("AI service busy: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "SERVICE_BUSY",
                    SERVICE_BUSY_MESSAGE.to_string(),
                )
            }
            AppError::UpstreamFormat(e) => {
                tracing::error!("Upstream format error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_FORMAT_ERROR",
                    e.to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Cancelled => (
                StatusCode::SERVICE_UNAVAILABLE,
                "CANCELLED",
                "The request was cancelled".to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
