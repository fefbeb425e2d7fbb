//! Error types for API handlers.
//!
//! This module defines the error type that bridges between domain errors
//! and HTTP responses, implementing Axum's `IntoResponse` trait.
//!
//! Each variant owns its wire shape: missing resources produce an empty
//! 404, validation failures a 400 with a field-to-message map, and
//! internal failures a 500 with a `code`/`message` body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use support_app_core::RequestError;

/// Field-level validation messages, keyed by the JSON field name.
///
/// A `BTreeMap` keeps the serialized order stable.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Application error type for API handlers.
///
/// # Examples
///
/// ```ignore
/// async fn handler() -> Result<Json<Data>, ApiError> {
///     let request = state.service.find_by_id(id).await?
///         .ok_or_else(ApiError::not_found)?;
///     Ok(Json(request))
/// }
/// ```
#[derive(Debug)]
pub enum ApiError {
    /// The requested resource does not exist. Rendered as a bare 404.
    NotFound,
    /// The request payload failed validation. Rendered as a 400 with a
    /// field-to-message body.
    Validation(FieldErrors),
    /// An unexpected failure. Rendered as a 500 with a code and message.
    Internal {
        /// User-facing error message.
        message: String,
        /// Internal error (for logging, not exposed to the client).
        source: Option<anyhow::Error>,
    },
}

impl ApiError {
    /// Create a 404 Not Found error.
    #[must_use]
    pub const fn not_found() -> Self {
        Self::NotFound
    }

    /// Create a 400 Bad Request error carrying field messages.
    #[must_use]
    pub const fn validation(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }

    /// Create a 500 Internal Server Error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Attach a source error for logging. Only internal errors carry one.
    #[must_use]
    pub fn with_source(mut self, source: anyhow::Error) -> Self {
        if let Self::Internal { source: slot, .. } = &mut self {
            *slot = Some(source);
        }
        self
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "[NOT_FOUND] Resource not found"),
            Self::Validation(errors) => {
                let fields = errors.keys().copied().collect::<Vec<_>>().join(", ");
                write!(f, "[VALIDATION_ERROR] Invalid fields: {fields}")
            }
            Self::Internal { message, .. } => write!(f, "[INTERNAL_SERVER_ERROR] {message}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Internal { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn std::error::Error + 'static)),
            _ => None,
        }
    }
}

/// Error response body for internal failures (JSON).
#[derive(Debug, Serialize)]
struct ErrorResponse {
    /// Error code (for client error handling).
    code: String,
    /// Human-readable error message.
    message: String,
}

/// Error response body for validation failures (JSON).
#[derive(Debug, Serialize)]
struct ValidationResponse {
    /// Field name to validation message.
    errors: FieldErrors,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationResponse { errors }),
            )
                .into_response(),
            Self::Internal { message, source } => {
                // Log internal errors
                if let Some(source) = &source {
                    tracing::error!(
                        code = "INTERNAL_SERVER_ERROR",
                        message = %message,
                        error = %source,
                        "Internal server error"
                    );
                } else {
                    tracing::error!(
                        code = "INTERNAL_SERVER_ERROR",
                        message = %message,
                        "Internal server error"
                    );
                }

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        code: "INTERNAL_SERVER_ERROR".to_string(),
                        message,
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Convert domain errors to HTTP errors.
///
/// `NotFound` becomes an empty 404; store failures become a 500 with the
/// domain message, keeping the original error attached for logging.
impl From<RequestError> for ApiError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::NotFound(_) => Self::not_found(),
            RequestError::Database(_) => {
                let message = err.to_string();
                Self::internal(message).with_source(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::*;
    use support_app_core::RequestId;

    #[test]
    fn test_error_display() {
        let err = ApiError::internal("boom");
        assert_eq!(err.to_string(), "[INTERNAL_SERVER_ERROR] boom");
    }

    #[test]
    fn test_validation_display_lists_fields() {
        let mut errors = FieldErrors::new();
        errors.insert("requestName", "must not be blank");
        errors.insert("subject", "must not be blank");

        let err = ApiError::validation(errors);

        assert_eq!(
            err.to_string(),
            "[VALIDATION_ERROR] Invalid fields: requestName, subject"
        );
    }

    #[test]
    fn test_not_found_renders_as_bare_404() {
        let response = ApiError::not_found().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_renders_as_400() {
        let mut errors = FieldErrors::new();
        errors.insert("subject", "must not be blank");

        let response = ApiError::validation(errors).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_renders_as_500() {
        let response = ApiError::internal("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_domain_not_found_maps_to_404() {
        let err = ApiError::from(RequestError::NotFound(RequestId::new(7)));
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn test_domain_database_error_maps_to_500() {
        let err = ApiError::from(RequestError::Database("boom".to_string()));

        match err {
            ApiError::Internal { message, source } => {
                assert_eq!(message, "Database error: boom");
                assert!(source.is_some());
            }
            other => panic!("expected internal error, got {other}"),
        }
    }
}
