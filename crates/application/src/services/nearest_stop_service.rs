//! Nearest stop service
//!
//! Composes geocoding and stop lookup: place name → coordinates → nearest stop.
//! Each call runs both steps in order and returns the first failure unchanged.

use std::sync::Arc;

use domain::{GeoLocation, NearestStop, PlaceQuery};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{GeocodingPort, StopLocatorPort};

/// Result of a full lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopLookup {
    /// The validated place name
    pub place: PlaceQuery,
    /// Coordinates the place resolved to
    pub location: GeoLocation,
    /// Stop nearest to `location`
    pub stop: NearestStop,
}

/// Whether each collaborator has its credential
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceReadiness {
    /// Geocoding credential present
    pub geocoding: bool,
    /// Transit credential present
    pub transit: bool,
}

impl ServiceReadiness {
    /// Both collaborators can serve requests
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.geocoding && self.transit
    }
}

/// Use case: find the transit stop nearest to a named place
pub struct NearestStopService {
    geocoder: Arc<dyn GeocodingPort>,
    stop_locator: Arc<dyn StopLocatorPort>,
}

impl std::fmt::Debug for NearestStopService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NearestStopService")
            .field("geocoder", &"<GeocodingPort>")
            .field("stop_locator", &"<StopLocatorPort>")
            .finish()
    }
}

impl NearestStopService {
    /// Create a new service from its two collaborators
    pub fn new(geocoder: Arc<dyn GeocodingPort>, stop_locator: Arc<dyn StopLocatorPort>) -> Self {
        Self {
            geocoder,
            stop_locator,
        }
    }

    /// Resolve a raw place name to its nearest stop
    ///
    /// Blank input fails with a validation error before the geocoder is called.
    #[instrument(skip(self))]
    pub async fn find_nearest_stop(&self, place: &str) -> Result<StopLookup, ApplicationError> {
        let place = PlaceQuery::parse(place)?;
        self.lookup(place).await
    }

    /// Run the pipeline for an already validated place
    pub async fn lookup(&self, place: PlaceQuery) -> Result<StopLookup, ApplicationError> {
        let location = self.geocode(&place).await?;
        let stop = self
            .stop_locator
            .nearest_stop(&location)
            .await
            .inspect_err(|e| warn!(kind = e.kind(), error = %e, "Stop lookup failed"))?;

        info!(place = %place, stop = %stop.name, "Nearest stop resolved");

        Ok(StopLookup {
            place,
            location,
            stop,
        })
    }

    /// Only the geocoding step
    pub async fn geocode(&self, place: &PlaceQuery) -> Result<GeoLocation, ApplicationError> {
        let location = self
            .geocoder
            .geocode(place)
            .await
            .inspect_err(|e| warn!(kind = e.kind(), error = %e, "Geocoding failed"))?;

        debug!(%place, %location, "Place geocoded");
        Ok(location)
    }

    /// Credential status of both collaborators, without touching the network
    #[must_use]
    pub fn readiness(&self) -> ServiceReadiness {
        ServiceReadiness {
            geocoding: self.geocoder.is_configured(),
            transit: self.stop_locator.is_configured(),
        }
    }
}
