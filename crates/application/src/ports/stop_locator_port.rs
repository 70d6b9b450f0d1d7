//! Stop locator port
//!
//! Resolves coordinates to the nearest transit stop.

use async_trait::async_trait;
use domain::{GeoLocation, NearestStop};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for nearest-stop lookup
///
/// Implementations return the first entry of the provider's
/// distance-sorted result; they do not re-sort.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StopLocatorPort: Send + Sync {
    /// Find the stop nearest to `location`
    async fn nearest_stop(&self, location: &GeoLocation) -> Result<NearestStop, ApplicationError>;

    /// Whether the credential needed by `nearest_stop` is present
    fn is_configured(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn StopLocatorPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn StopLocatorPort>();
    }
}
