//! Mapbox geocoding client
//!
//! Converts free-form place names to geographic coordinates using the
//! [Mapbox Search Box](https://docs.mapbox.com/api/search/search-box/)
//! forward endpoint.
//!
//! Mapbox returns GeoJSON, so coordinates arrive as `[longitude, latitude]`
//! and are swapped into a [`GeoLocation`] here.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

/// Configuration for the Mapbox forward-geocoding service
#[derive(Clone, Serialize, Deserialize)]
pub struct MapboxConfig {
    /// Full URL of the forward-geocoding endpoint
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// Mapbox access token, checked on every lookup
    #[serde(default, skip_serializing)]
    pub access_token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_geocoding_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_geocoding_base_url() -> String {
    "https://api.mapbox.com/search/searchbox/v1/forward".to_string()
}

const fn default_geocoding_timeout_secs() -> u64 {
    10
}

impl Default for MapboxConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            access_token: None,
            timeout_secs: default_geocoding_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for MapboxConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxConfig")
            .field("base_url", &self.base_url)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl MapboxConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            access_token: Some("test-mapbox-token".to_string()),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Whether a non-empty access token is present
    #[must_use]
    pub fn has_access_token(&self) -> bool {
        self.access_token
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Access token is not configured
    #[error("MAPBOX_API_KEY is missing. Check your configuration.")]
    MissingAccessToken,

    /// Place could not be resolved to coordinates
    #[error("Could not find coordinates for '{0}'")]
    PlaceNotFound(String),

    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to geocoding service failed
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Geocoding rate limit exceeded")]
    RateLimitExceeded,

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,
}

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a place name to geographic coordinates
    async fn geocode(&self, place: &str) -> Result<GeoLocation, GeocodingError>;
}

/// Mapbox-based forward-geocoding client
#[derive(Debug)]
pub struct MapboxGeocodingClient {
    client: Client,
    config: MapboxConfig,
}

impl MapboxGeocodingClient {
    /// Create a new Mapbox geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &MapboxConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("NearStop/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Whether an access token is configured
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.config.has_access_token()
    }

    fn access_token(&self) -> Result<&str, GeocodingError> {
        self.config
            .access_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(GeocodingError::MissingAccessToken)
    }

    /// Parse a forward-geocoding response into the first feature's location
    fn parse_forward_response(body: &str, place: &str) -> Result<GeoLocation, GeocodingError> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let not_found = || GeocodingError::PlaceNotFound(place.to_string());

        // GeoJSON position of the first feature only; a missing `features`
        // key and an empty list are the same outcome
        let coordinates: Vec<f64> = value
            .pointer("/features/0/geometry/coordinates")
            .cloned()
            .and_then(|c| serde_json::from_value(c).ok())
            .ok_or_else(not_found)?;

        let [lon, lat, ..] = coordinates.as_slice() else {
            return Err(not_found());
        };

        GeoLocation::new(*lat, *lon).map_err(|_| not_found())
    }
}

#[async_trait]
impl GeocodingClient for MapboxGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, place: &str) -> Result<GeoLocation, GeocodingError> {
        let place = place.trim();
        if place.is_empty() {
            return Err(GeocodingError::PlaceNotFound(place.to_string()));
        }

        let access_token = self.access_token()?;
        let params = [("q", place), ("access_token", access_token)];

        debug!(%place, "Geocoding place");

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodingError::RateLimitExceeded);
        }

        if !status.is_success() {
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let location = Self::parse_forward_response(&body, place)?;
        debug!(%place, lat = location.latitude(), lon = location.longitude(), "Geocoded place");

        Ok(location)
    }
}
