use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upload exceeds {0} bytes")]
    PayloadTooLarge(usize),

    #[error("Parsing failed: {0}")]
    Parsing(String),

    #[error("Narrative unavailable: {0}")]
    NarrativeUnavailable(String),

    #[error("LLM authentication failed")]
    LlmAuth,

    #[error("Rate limited")]
    RateLimited,

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PayloadTooLarge(limit) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                format!("Uploaded file exceeds the {limit}-byte limit"),
            ),
            AppError::Parsing(msg) => {
                tracing::error!("Parsing error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PARSING_ERROR",
                    format!("Parsing failed: {msg}"),
                )
            }
            AppError::NarrativeUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "NARRATIVE_UNAVAILABLE",
                msg.clone(),
            ),
            AppError::LlmAuth => {
                tracing::error!("LLM authentication failed");
                (
                    StatusCode::UNAUTHORIZED,
                    "LLM_AUTH_ERROR",
                    "AI authentication failed. Please check your API key.".to_string(),
                )
            }
            AppError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "RATE_LIMITED",
                "Rate limit exceeded. Please try again in a moment.".to_string(),
            ),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (AppError::PayloadTooLarge(10), StatusCode::PAYLOAD_TOO_LARGE),
            (AppError::Parsing("bad".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::NarrativeUnavailable("off".into()), StatusCode::SERVICE_UNAVAILABLE),
            (AppError::LlmAuth, StatusCode::UNAUTHORIZED),
            (AppError::RateLimited, StatusCode::TOO_MANY_REQUESTS),
            (AppError::Llm("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
