//! Geocoding service port
//!
//! Resolves a place name to coordinates.

use async_trait::async_trait;
use domain::{GeoLocation, PlaceQuery};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for forward geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a place name to `(latitude, longitude)`
    ///
    /// Fails with `Configuration` when no credential is set (before any
    /// request is made) and `NotFound` when the service has no match.
    async fn geocode(&self, place: &PlaceQuery) -> Result<GeoLocation, ApplicationError>;

    /// Whether the credential needed by `geocode` is present
    fn is_configured(&self) -> bool;
}
