//! Transit adapter - Implements StopLocatorPort using the MBTA client

use application::error::ApplicationError;
use application::ports::StopLocatorPort;
use async_trait::async_trait;
use domain::{GeoLocation, NearestStop};
use integration_transit::{MbtaConfig, MbtaStopClient, Stop, StopClient, TransitError};
use tracing::{debug, instrument};

/// Adapter for nearest-stop lookups via the MBTA v3 API
#[derive(Debug)]
pub struct TransitAdapter {
    client: MbtaStopClient,
}

impl TransitAdapter {
    /// Create a new adapter from a client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &MbtaConfig) -> Result<Self, ApplicationError> {
        let client =
            MbtaStopClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration transit error to application error
    fn map_error(err: TransitError) -> ApplicationError {
        match err {
            TransitError::MissingApiKey => ApplicationError::Configuration(err.to_string()),
            TransitError::NoStopsFound { .. } => ApplicationError::NotFound(err.to_string()),
            TransitError::ConnectionFailed(_)
            | TransitError::RequestFailed(_)
            | TransitError::ParseError(_)
            | TransitError::RateLimitExceeded { .. }
            | TransitError::Timeout { .. } => ApplicationError::ExternalService(err.to_string()),
        }
    }

    fn to_nearest_stop(stop: Stop) -> NearestStop {
        let accessibility = stop.accessibility();
        NearestStop::new(stop.name, accessibility)
    }
}

#[async_trait]
impl StopLocatorPort for TransitAdapter {
    #[instrument(skip(self), fields(location = %location))]
    async fn nearest_stop(&self, location: &GeoLocation) -> Result<NearestStop, ApplicationError> {
        let stop = self
            .client
            .nearest_stop(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)?;

        debug!(stop_id = %stop.id, stop = %stop.name, "Found nearest stop");
        Ok(Self::to_nearest_stop(stop))
    }

    fn is_configured(&self) -> bool {
        self.client.is_configured()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::WheelchairAccessibility;

    #[test]
    fn missing_key_is_configuration() {
        let err = TransitAdapter::map_error(TransitError::MissingApiKey);
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }

    #[test]
    fn no_stops_is_not_found() {
        let err = TransitAdapter::map_error(TransitError::NoStopsFound {
            latitude: 0.0,
            longitude: 0.0,
        });
        assert!(matches!(err, ApplicationError::NotFound(_)));
        assert_eq!(err.to_string(), "No MBTA stops found near that location.");
    }

    #[test]
    fn transport_failures_are_external_service() {
        for err in [
            TransitError::ConnectionFailed("refused".into()),
            TransitError::RequestFailed("HTTP 503".into()),
            TransitError::ParseError("eof".into()),
            TransitError::RateLimitExceeded {
                retry_after_secs: Some(5),
            },
            TransitError::Timeout { timeout_secs: 10 },
        ] {
            assert!(matches!(
                TransitAdapter::map_error(err),
                ApplicationError::ExternalService(_)
            ));
        }
    }

    #[test]
    fn stop_conversion_keeps_name_and_accessibility() {
        let stop = Stop {
            id: "place-pktrm".into(),
            name: "Park Street".into(),
            wheelchair_boarding: Some(1),
        };

        let nearest = TransitAdapter::to_nearest_stop(stop);
        assert_eq!(nearest.name, "Park Street");
        assert_eq!(
            nearest.wheelchair_accessible,
            WheelchairAccessibility::Accessible
        );
    }

    #[test]
    fn reports_configuration() {
        let adapter = TransitAdapter::new(&MbtaConfig::for_testing()).unwrap();
        assert!(adapter.is_configured());

        let adapter = TransitAdapter::new(&MbtaConfig::default()).unwrap();
        assert!(!adapter.is_configured());
    }
}
