//! API error handling
//!
//! Provides sanitized error responses that don't leak implementation details.
//! In production mode, transport and internal errors return generic messages.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use infrastructure::TemplateError;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// Global flag to control error detail exposure
/// Set to false in production to prevent information leakage
static EXPOSE_INTERNAL_ERRORS: AtomicBool = AtomicBool::new(true);

/// Configure whether internal error details should be exposed in responses.
///
/// Called once at startup from the configured environment.
pub fn set_expose_internal_errors(expose: bool) {
    EXPOSE_INTERNAL_ERRORS.store(expose, Ordering::SeqCst);
}

fn should_expose_details() -> bool {
    EXPOSE_INTERNAL_ERRORS.load(Ordering::SeqCst)
}

const GENERIC_MESSAGE: &str = "An error occurred processing your request";

/// Sanitize an error message to remove potentially sensitive information
///
/// Upstream failures can carry URLs or connection details; those are replaced
/// by a generic message unless `expose` is set.
fn sanitize_error_message(msg: &str, expose: bool) -> String {
    if expose {
        return msg.to_string();
    }

    let sensitive_patterns = [
        // URLs and query strings
        "://",
        "api_key=",
        "access_token=",
        // File paths
        "/home/",
        "/Users/",
        "/var/",
        "/etc/",
        // Stack trace indicators
        "panicked at",
        ".rs:",
        // Connection details
        "connection refused",
        "dns error",
    ];

    let msg_lower = msg.to_lowercase();
    if sensitive_patterns
        .iter()
        .any(|pattern| msg_lower.contains(&pattern.to_lowercase()))
    {
        return GENERIC_MESSAGE.to_string();
    }

    msg.to_string()
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input rejected before any lookup (e.g. blank place name)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Upstream had no result for the input
    #[error("Not found: {0}")]
    NotFound(String),

    /// Upstream call failed (network, timeout, HTTP status, unreadable body)
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// A credential or setting is missing
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// HTTP status for this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Configuration(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::NotFound(_) => "not_found",
            Self::ServiceUnavailable(_) => "service_unavailable",
            Self::Configuration(_) => "configuration_error",
            Self::Internal(_) => "internal_error",
        }
    }

    /// Message safe to show to the user, plus optional internal details
    fn public_parts(&self, expose: bool) -> (String, Option<String>) {
        match self {
            // Validation, not-found and missing-credential messages are written for users
            Self::BadRequest(msg) | Self::NotFound(msg) | Self::Configuration(msg) => {
                (sanitize_error_message(msg, expose), None)
            },
            Self::ServiceUnavailable(msg) => {
                let sanitized = if expose {
                    msg.clone()
                } else {
                    "Service temporarily unavailable".to_string()
                };
                (sanitized, None)
            },
            Self::Internal(msg) => {
                let details = expose.then(|| msg.clone());
                ("An internal error occurred".to_string(), details)
            },
        }
    }

    /// Message shown on the HTML error page
    #[must_use]
    pub fn public_message(&self) -> String {
        self.public_parts(should_expose_details()).0
    }

    fn to_body(&self, expose: bool) -> ErrorResponse {
        let (error, details) = self.public_parts(expose);
        ErrorResponse {
            error,
            code: self.code().to_string(),
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = self.to_body(should_expose_details());
        (self.status(), Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::NotFound(msg) => Self::NotFound(msg),
            ApplicationError::ExternalService(_) => Self::ServiceUnavailable(err.to_string()),
            ApplicationError::Configuration(msg) => Self::Configuration(msg),
            ApplicationError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<TemplateError> for ApiError {
    fn from(err: TemplateError) -> Self {
        Self::Internal(err.to_string())
    }
}
