use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::review::extract::ExtractError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders as `{"error": "<message>"}`; only the status differs.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No file provided")]
    MissingFile,

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::MissingFile | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Extract(_) | AppError::Llm(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            AppError::Llm(e) => tracing::error!("LLM error: {e}"),
            AppError::Extract(e) => tracing::error!("Extraction error: {e}"),
            AppError::MissingFile | AppError::BadRequest(_) => {
                tracing::warn!("Rejected request: {self}")
            }
        }

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}
