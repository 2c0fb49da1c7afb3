//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps content lookups, form validation and dispatch backend failures to
//! HTTP status codes with a JSON body of error code, message, and details.
//! Upstream and internal failure details are logged, never returned.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use gt_dispatch_client::DispatchApiError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// The `details` field carries the field map of an upstream validation
/// failure and is omitted otherwise.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.to_string(),
                message: message.into(),
                details: None,
            },
        }
    }
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Unknown slug or id (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Request body could not be parsed (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// A form failed validation (422). The message is shown to the visitor.
    #[error("{0}")]
    Validation(String),

    /// The dispatch backend refused the submission field by field (422).
    #[error("{message}")]
    UpstreamRejected {
        message: String,
        errors: BTreeMap<String, Vec<String>>,
    },

    /// The dispatch backend failed (502). Message is logged but not returned.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// The dispatch backend did not answer in time (504).
    #[error("upstream timeout: {0}")]
    UpstreamTimeout(String),

    /// No dispatch client is configured (503).
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Internal server error (500). Message is logged but not returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(kind: &str, slug: &str) -> Self {
        Self::NotFound(format!("{kind} '{slug}'"))
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Return the HTTP status code and machine-readable error code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::Validation(_) | Self::UpstreamRejected { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR")
            }
            Self::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            Self::UpstreamTimeout(_) => (StatusCode::GATEWAY_TIMEOUT, "UPSTREAM_TIMEOUT"),
            Self::ServiceUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE")
            }
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            Self::Upstream(_) => {
                "An error occurred while processing your request. Please try again later."
                    .to_string()
            }
            Self::UpstreamTimeout(_) => {
                "The request timed out. Please try again later.".to_string()
            }
            other => other.to_string(),
        };

        match &self {
            Self::Internal(_) => tracing::error!(error = %self, "internal server error"),
            Self::Upstream(_) | Self::UpstreamTimeout(_) => {
                tracing::error!(error = %self, "dispatch backend failure")
            }
            _ => {}
        }

        let details = match &self {
            Self::UpstreamRejected { errors, .. } if !errors.is_empty() => {
                serde_json::to_value(errors).ok()
            }
            _ => None,
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert form validation failures to API errors.
impl From<gt_core::ValidationError> for AppError {
    fn from(err: gt_core::ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Convert dispatch client errors to API errors.
impl From<DispatchApiError> for AppError {
    fn from(err: DispatchApiError) -> Self {
        match err {
            DispatchApiError::Timeout { .. } => Self::UpstreamTimeout(err.to_string()),
            DispatchApiError::Rejected {
                status,
                message,
                errors,
                ..
            } if (400..500).contains(&status) => Self::UpstreamRejected { message, errors },
            other => Self::Upstream(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_status_code() {
        let err = AppError::not_found("partner", "acme");
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, "NOT_FOUND");
        assert_eq!(err.to_string(), "not found: partner 'acme'");
    }

    #[test]
    fn validation_message_is_verbatim() {
        let err = AppError::from(gt_core::ValidationError::MissingField("First name"));
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(code, "VALIDATION_ERROR");
        assert_eq!(err.to_string(), "First name is required");
    }

    #[test]
    fn upstream_status_codes() {
        let (status, code) = AppError::Upstream("x".into()).status_and_code();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(code, "UPSTREAM_ERROR");

        let (status, code) = AppError::UpstreamTimeout("x".into()).status_and_code();
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(code, "UPSTREAM_TIMEOUT");

        let (status, code) = AppError::service_unavailable("x").status_and_code();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(code, "SERVICE_UNAVAILABLE");
    }

    #[test]
    fn dispatch_errors_convert() {
        let timeout = AppError::from(DispatchApiError::Timeout {
            endpoint: "POST /api/v1/dispatch/contact/".into(),
        });
        assert!(matches!(timeout, AppError::UpstreamTimeout(_)));

        let rejected = AppError::from(DispatchApiError::Rejected {
            endpoint: "POST /api/v1/dispatch/contact/".into(),
            status: 400,
            message: "Validation failed".into(),
            errors: BTreeMap::from([("email".to_string(), vec!["bad".to_string()])]),
        });
        assert!(matches!(rejected, AppError::UpstreamRejected { .. }));

        let server_side = AppError::from(DispatchApiError::Rejected {
            endpoint: "POST /api/v1/dispatch/contact/".into(),
            status: 500,
            message: "An error occurred".into(),
            errors: BTreeMap::new(),
        });
        assert!(matches!(server_side, AppError::Upstream(_)));

        let api = AppError::from(DispatchApiError::ApiError {
            endpoint: "GET /api/v1/dispatch/".into(),
            status: 404,
            body: "<html>".into(),
        });
        assert!(matches!(api, AppError::Upstream(_)));
    }

    #[test]
    fn error_body_serializes_without_details() {
        let json = serde_json::to_string(&ErrorBody::new("TEST", "test message")).unwrap();
        assert!(json.contains("TEST"));
        assert!(json.contains("test message"));
        assert!(!json.contains("details"));
    }

    // ── into_response tests ──────────────────────────────────────

    use http_body_util::BodyExt;

    async fn response_parts(err: AppError) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn into_response_upstream_rejected_carries_field_map() {
        let (status, body) = response_parts(AppError::UpstreamRejected {
            message: "Validation failed".into(),
            errors: BTreeMap::from([(
                "email".to_string(),
                vec!["Enter a valid email address.".to_string()],
            )]),
        })
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.error.message, "Validation failed");
        let details = body.error.details.unwrap();
        assert_eq!(details["email"][0], "Enter a valid email address.");
    }

    #[tokio::test]
    async fn into_response_hides_upstream_detail() {
        let (status, body) =
            response_parts(AppError::Upstream("connection reset by 10.0.0.7".into())).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(!body.error.message.contains("10.0.0.7"));
    }

    #[tokio::test]
    async fn into_response_hides_internal_detail() {
        let (status, body) = response_parts(AppError::Internal("secret path".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.code, "INTERNAL_ERROR");
        assert!(!body.error.message.contains("secret"));
    }
}
