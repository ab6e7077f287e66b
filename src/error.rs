use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm::LlmError;
use crate::translate::TranslateError;

/// Errors returned to HTTP clients as `{"error": "<message>"}`.
/// Messages are fixed; upstream detail is logged, never echoed.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON input")]
    InvalidJson,
    #[error("Please select both source and target languages")]
    LanguageNotSelected,
    #[error("Invalid input parameters")]
    InvalidInput,
    #[error("Translation service unavailable")]
    UpstreamUnavailable,
    #[error("Translation service timed out")]
    UpstreamTimeout,
    #[error("Not found")]
    NotFound,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson | ApiError::LanguageNotSelected | ApiError::InvalidInput => {
                StatusCode::BAD_REQUEST
            }
            ApiError::UpstreamUnavailable => StatusCode::BAD_GATEWAY,
            ApiError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<TranslateError> for ApiError {
    fn from(e: TranslateError) -> Self {
        match e {
            TranslateError::InvalidInput(_) => ApiError::InvalidInput,
            TranslateError::Upstream(LlmError::Timeout) => ApiError::UpstreamTimeout,
            TranslateError::Upstream(_) => ApiError::UpstreamUnavailable,
        }
    }
}
