//! HTTP error mapping. Turns domain errors into JSON error responses.

use crate::domain::DomainError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Error returned by handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 400 `{ error }`
    BadRequest(String),
    /// 500 `{ error: "Internal server error", message, details? }`
    Internal {
        message: String,
        details: Option<String>,
    },
}

#[derive(Serialize)]
struct BadRequestBody<'a> {
    error: &'a str,
}

#[derive(Serialize)]
struct InternalErrorBody<'a> {
    error: &'static str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a str>,
}

impl ApiError {
    /// Map a domain error. `expose_details` adds the debug form of the error (development only).
    pub fn from_domain(err: DomainError, expose_details: bool) -> Self {
        if err.is_client_error() {
            return ApiError::BadRequest(err.to_string());
        }
        let message = err.to_string();
        let message = if message.is_empty() {
            "Unknown error occurred".to_string()
        } else {
            message
        };
        ApiError::Internal {
            message,
            details: expose_details.then(|| format!("{:?}", err)),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::BadRequest(error) => (status, Json(BadRequestBody { error })).into_response(),
            ApiError::Internal { message, details } => (
                status,
                Json(InternalErrorBody {
                    error: "Internal server error",
                    message,
                    details: details.as_deref(),
                }),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = ApiError::from_domain(DomainError::Validation("Text is required".into()), true);
        assert_eq!(err, ApiError::BadRequest("Text is required".into()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_provider_errors_map_to_internal() {
        let err = ApiError::from_domain(
            DomainError::ProviderResponseInvalid("Invalid JSON response from model".into()),
            false,
        );
        assert_eq!(
            err,
            ApiError::Internal {
                message: "Invalid JSON response from model".into(),
                details: None,
            }
        );

        let err =
            ApiError::from_domain(DomainError::ProviderUnavailable("timeout".into()), true);
        match err {
            ApiError::Internal { details, .. } => {
                assert!(details.unwrap().contains("ProviderUnavailable"))
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
