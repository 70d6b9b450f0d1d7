//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// The variants keep configuration, empty-result and transport failures
/// apart so callers can react to each differently.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Input rejected by a domain invariant (e.g. blank place name)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Required configuration (usually a credential) is missing
    #[error("{0}")]
    Configuration(String),

    /// The upstream service had no usable result for the input
    #[error("{0}")]
    NotFound(String),

    /// Network, timeout, HTTP status or response parsing failure
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Short machine-readable kind, used for logging and error codes
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Domain(_) => "validation",
            Self::Configuration(_) => "configuration",
            Self::NotFound(_) => "not_found",
            Self::ExternalService(_) => "transport",
            Self::Internal(_) => "internal",
        }
    }
}
