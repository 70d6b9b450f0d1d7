//! MBTA stop client via the v3 JSON:API
//!
//! Looks up the stop closest to a coordinate pair using the public
//! [api-v3.mbta.com](https://api-v3.mbta.com) `stops` resource.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::MbtaConfig;
use crate::error::TransitError;
use crate::models::{RawStopResource, Stop};

/// Trait for transit stop clients
#[async_trait]
pub trait StopClient: Send + Sync {
    /// Find the stop nearest to a set of coordinates
    ///
    /// The service sorts results by distance; the first entry is returned
    /// as-is without re-checking that ordering.
    async fn nearest_stop(&self, latitude: f64, longitude: f64) -> Result<Stop, TransitError>;
}

/// MBTA v3 API stop client
#[derive(Debug)]
pub struct MbtaStopClient {
    client: Client,
    config: MbtaConfig,
}

impl MbtaStopClient {
    /// Create a new MBTA stop client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &MbtaConfig) -> Result<Self, TransitError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("NearStop/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransitError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Whether an API key is configured
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.config.has_api_key()
    }

    fn api_key(&self) -> Result<&str, TransitError> {
        self.config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(TransitError::MissingApiKey)
    }

    /// Build the query parameters for a distance-sorted stop search
    fn query_params(api_key: &str, latitude: f64, longitude: f64) -> Vec<(&'static str, String)> {
        vec![
            ("api_key", api_key.to_string()),
            ("sort", "distance".to_string()),
            ("filter[latitude]", latitude.to_string()),
            ("filter[longitude]", longitude.to_string()),
        ]
    }

    /// Parse a stops response and take its first entry
    fn parse_nearest_response(
        body: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Stop, TransitError> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|e| TransitError::ParseError(e.to_string()))?;

        // Only `data[0]` is decoded; later entries are never inspected
        value
            .get("data")
            .and_then(|data| data.get(0))
            .cloned()
            .and_then(|first| serde_json::from_value::<RawStopResource>(first).ok())
            .and_then(RawStopResource::into_stop)
            .ok_or(TransitError::NoStopsFound {
                latitude,
                longitude,
            })
    }
}

#[async_trait]
impl StopClient for MbtaStopClient {
    #[instrument(skip(self))]
    async fn nearest_stop(&self, latitude: f64, longitude: f64) -> Result<Stop, TransitError> {
        let api_key = self.api_key()?;
        let params = Self::query_params(api_key, latitude, longitude);

        debug!(url = %self.config.base_url, "Searching nearest stop");

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransitError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    TransitError::ConnectionFailed(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TransitError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        if !status.is_success() {
            return Err(TransitError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransitError::ParseError(e.to_string()))?;

        let stop = Self::parse_nearest_response(&body, latitude, longitude);
        match &stop {
            Ok(stop) => debug!(stop = %stop.name, id = %stop.id, "Nearest stop found"),
            Err(e) => warn!(error = %e, "No usable stop in response"),
        }
        stop
    }
}
