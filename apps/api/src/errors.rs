use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::appeal::sections::SectionError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every failure aborts the whole request; there are no partial results and
/// no retries. The response body is `{ "error": <user message>, "details":
/// <source error> }`, with the user message distinguishing the cause where
/// the upstream error shape allows it.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Section parse error: {0}")]
    Section(#[from] SectionError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                let message = match e {
                    LlmError::MissingApiKey => {
                        "API key is missing. Please set OPENAI_API_KEY in environment variables."
                    }
                    LlmError::Timeout => "The request timed out. Please try again.",
                    LlmError::RateLimited { .. } => {
                        "Too many requests. Please wait a moment and try again."
                    }
                    LlmError::AuthFailed { .. } => "The API key was rejected by the provider.",
                    LlmError::Api { .. } | LlmError::Http(_) | LlmError::EmptyContent => {
                        "Failed to generate appeal"
                    }
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    message.to_string(),
                    Some(e.to_string()),
                )
            }
            AppError::Section(e) => {
                tracing::error!("Section parse error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate appeal".to_string(),
                    Some(e.to_string()),
                )
            }
        };

        let mut body = json!({ "error": message });
        if let Some(details) = details {
            body["details"] = json!(details);
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn response_parts(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_maps_to_400_without_details() {
        let (status, body) =
            response_parts(AppError::Validation("Business name is required".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Business name is required");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_timeout_maps_to_500_with_timeout_message() {
        let (status, body) = response_parts(AppError::Llm(LlmError::Timeout)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "The request timed out. Please try again.");
    }

    #[tokio::test]
    async fn test_rate_limit_maps_to_distinct_message() {
        let err = AppError::Llm(LlmError::RateLimited {
            message: "slow down".into(),
        });
        let (status, body) = response_parts(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"],
            "Too many requests. Please wait a moment and try again."
        );
        assert!(body["details"].as_str().unwrap().contains("slow down"));
    }

    #[tokio::test]
    async fn test_missing_section_maps_to_500() {
        let err = AppError::Section(SectionError::MissingSection(
            "[Business Model Overview]".into(),
        ));
        let (status, body) = response_parts(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["details"]
            .as_str()
            .unwrap()
            .contains("[Business Model Overview]"));
    }
}
