use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractError;
use crate::llm_client::BackendError;
use crate::localization::{Language, LocalizationTable};

/// Failure categories surfaced to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureKind {
    UnsupportedFormat,
    ExtractionFailed,
    BackendUnavailable,
    BackendCallFailed,
    EmptyOrInvalidResponse,
}

impl FailureKind {
    pub fn code(self) -> &'static str {
        match self {
            FailureKind::UnsupportedFormat => "UNSUPPORTED_FORMAT",
            FailureKind::ExtractionFailed => "EXTRACTION_FAILED",
            FailureKind::BackendUnavailable => "BACKEND_UNAVAILABLE",
            FailureKind::BackendCallFailed => "BACKEND_CALL_FAILED",
            FailureKind::EmptyOrInvalidResponse => "EMPTY_OR_INVALID_RESPONSE",
        }
    }

    fn status(self) -> StatusCode {
        match self {
            FailureKind::UnsupportedFormat => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            FailureKind::ExtractionFailed => StatusCode::UNPROCESSABLE_ENTITY,
            FailureKind::BackendUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            FailureKind::BackendCallFailed | FailureKind::EmptyOrInvalidResponse => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

impl From<&BackendError> for FailureKind {
    fn from(err: &BackendError) -> Self {
        match err {
            BackendError::Unavailable(_) => FailureKind::BackendUnavailable,
            BackendError::EmptyOrInvalidResponse => FailureKind::EmptyOrInvalidResponse,
            BackendError::Http(_)
            | BackendError::Api { .. }
            | BackendError::Parse(_)
            | BackendError::Timeout(_) => FailureKind::BackendCallFailed,
        }
    }
}

impl From<&ExtractError> for FailureKind {
    fn from(err: &ExtractError) -> Self {
        match err {
            ExtractError::UnsupportedFormat(_) => FailureKind::UnsupportedFormat,
            ExtractError::ExtractionFailed(_) => FailureKind::ExtractionFailed,
        }
    }
}

/// A user-facing failure: a category plus a message in the request language.
///
/// The raw cause is logged where the failure is built and never carried here.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    pub fn localized(kind: FailureKind, language: Language, locales: &LocalizationTable) -> Self {
        let errors = locales.error_messages_for(language);
        let message = match kind {
            FailureKind::UnsupportedFormat => errors.unsupported_format,
            FailureKind::ExtractionFailed => errors.extraction_failed,
            FailureKind::BackendUnavailable => errors.backend_unavailable,
            FailureKind::BackendCallFailed | FailureKind::EmptyOrInvalidResponse => {
                locales.error_message_for(language)
            }
        };
        Failure {
            kind,
            message: message.to_string(),
        }
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Failure(#[from] Failure),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Failure(failure) => (
                failure.kind.status(),
                failure.kind.code(),
                failure.message.clone(),
            ),
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
    use std::time::Duration;

    use super::*;
    use crate::llm_client::Backend;

    #[test]
    fn test_backend_errors_map_to_kinds() {
        assert_eq!(
            FailureKind::from(&BackendError::Unavailable(Backend::Groq)),
            FailureKind::BackendUnavailable
        );
        assert_eq!(
            FailureKind::from(&BackendError::Timeout(Duration::from_secs(1))),
            FailureKind::BackendCallFailed
        );
        assert_eq!(
            FailureKind::from(&BackendError::Api {
                status: 429,
                message: "quota".to_string()
            }),
            FailureKind::BackendCallFailed
        );
        assert_eq!(
            FailureKind::from(&BackendError::EmptyOrInvalidResponse),
            FailureKind::EmptyOrInvalidResponse
        );
    }

    #[test]
    fn test_call_failures_use_generic_localized_message() {
        let locales = LocalizationTable::builtin();
        let failure = Failure::localized(FailureKind::BackendCallFailed, Language::Hindi, &locales);
        assert_eq!(failure.message, locales.error_message_for(Language::Hindi));
        assert!(!failure.message.contains("quota"));
    }

    #[test]
    fn test_failure_status_codes() {
        let cases = [
            (FailureKind::UnsupportedFormat, StatusCode::UNSUPPORTED_MEDIA_TYPE),
            (FailureKind::ExtractionFailed, StatusCode::UNPROCESSABLE_ENTITY),
            (FailureKind::BackendUnavailable, StatusCode::SERVICE_UNAVAILABLE),
            (FailureKind::BackendCallFailed, StatusCode::BAD_GATEWAY),
            (FailureKind::EmptyOrInvalidResponse, StatusCode::BAD_GATEWAY),
        ];
        let locales = LocalizationTable::builtin();
        for (kind, status) in cases {
            let err = AppError::from(Failure::localized(kind, Language::English, &locales));
            assert_eq!(err.into_response().status(), status, "{kind:?}");
        }
    }

    #[test]
    fn test_validation_is_bad_request() {
        let response = AppError::Validation("job description is empty".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_error_body_carries_code_and_message() {
        let locales = LocalizationTable::builtin();
        let response = AppError::from(Failure::localized(
            FailureKind::ExtractionFailed,
            Language::Telugu,
            &locales,
        ))
        .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"]["code"], "EXTRACTION_FAILED");
        assert_eq!(
            json["error"]["message"],
            locales.error_messages_for(Language::Telugu).extraction_failed
        );
    }
}
