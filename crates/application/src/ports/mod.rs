//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod geocoding_port;
mod secret_store;
mod stop_locator_port;

#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::GeocodingPort;
pub use secret_store::SecretStorePort;
#[cfg(test)]
pub use stop_locator_port::MockStopLocatorPort;
pub use stop_locator_port::StopLocatorPort;
