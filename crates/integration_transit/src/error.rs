//! Transit error types

use thiserror::Error;

/// Errors that can occur during transit operations
#[derive(Debug, Error)]
pub enum TransitError {
    /// API key is not configured
    #[error("MBTA_API_KEY is missing. Check your configuration.")]
    MissingApiKey,

    /// The service returned no usable stop for the location
    #[error("No MBTA stops found near that location.")]
    NoStopsFound {
        /// Latitude that was searched
        latitude: f64,
        /// Longitude that was searched
        longitude: f64,
    },

    /// Connection to the transit service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to transit service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from transit service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            TransitError::NoStopsFound {
                latitude: 0.0,
                longitude: 0.0
            }
            .to_string(),
            "No MBTA stops found near that location."
        );
        assert!(TransitError::MissingApiKey.to_string().contains("MBTA_API_KEY"));

        let err = TransitError::RateLimitExceeded {
            retry_after_secs: Some(60),
        };
        assert!(err.to_string().contains("60"));

        let err = TransitError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10"));
    }
}
