//! Geocoding adapter - Implements GeocodingPort using the Mapbox client

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::{GeoLocation, PlaceQuery};
use integration_transit::{GeocodingClient, GeocodingError, MapboxConfig, MapboxGeocodingClient};
use tracing::{debug, instrument};

/// Adapter for forward geocoding via Mapbox
#[derive(Debug)]
pub struct GeocodingAdapter {
    client: MapboxGeocodingClient,
}

impl GeocodingAdapter {
    /// Create a new adapter from a client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &MapboxConfig) -> Result<Self, ApplicationError> {
        let client =
            MapboxGeocodingClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration geocoding error to application error
    fn map_error(err: GeocodingError) -> ApplicationError {
        match err {
            GeocodingError::MissingAccessToken => ApplicationError::Configuration(err.to_string()),
            GeocodingError::PlaceNotFound(_) => ApplicationError::NotFound(err.to_string()),
            GeocodingError::ConnectionFailed(_)
            | GeocodingError::RequestFailed(_)
            | GeocodingError::ParseError(_)
            | GeocodingError::RateLimitExceeded
            | GeocodingError::Timeout => ApplicationError::ExternalService(err.to_string()),
        }
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self), fields(place = %place))]
    async fn geocode(&self, place: &PlaceQuery) -> Result<GeoLocation, ApplicationError> {
        let location = self
            .client
            .geocode(place.as_str())
            .await
            .map_err(Self::map_error)?;

        debug!(%location, "Geocoded place");
        Ok(location)
    }

    fn is_configured(&self) -> bool {
        self.client.is_configured()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_is_configuration() {
        let err = GeocodingAdapter::map_error(GeocodingError::MissingAccessToken);
        assert!(matches!(err, ApplicationError::Configuration(_)));
        assert_eq!(err.to_string(), "MAPBOX_API_KEY is missing. Check your configuration.");
    }

    #[test]
    fn place_not_found_keeps_message() {
        let err = GeocodingAdapter::map_error(GeocodingError::PlaceNotFound("Atlantis".into()));
        assert!(matches!(err, ApplicationError::NotFound(_)));
        assert_eq!(err.to_string(), "Could not find coordinates for 'Atlantis'");
    }

    #[test]
    fn transport_failures_are_external_service() {
        for err in [
            GeocodingError::ConnectionFailed("refused".into()),
            GeocodingError::RequestFailed("HTTP 500".into()),
            GeocodingError::ParseError("eof".into()),
            GeocodingError::RateLimitExceeded,
            GeocodingError::Timeout,
        ] {
            assert!(matches!(
                GeocodingAdapter::map_error(err),
                ApplicationError::ExternalService(_)
            ));
        }
    }

    #[test]
    fn reports_configuration() {
        let adapter = GeocodingAdapter::new(&MapboxConfig::for_testing()).unwrap();
        assert!(adapter.is_configured());

        let adapter = GeocodingAdapter::new(&MapboxConfig::default()).unwrap();
        assert!(!adapter.is_configured());
    }
}
