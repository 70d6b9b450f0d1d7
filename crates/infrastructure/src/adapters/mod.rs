//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod env_secret_store;
mod geocoding_adapter;
mod transit_adapter;

pub use env_secret_store::EnvSecretStore;
pub use geocoding_adapter::GeocodingAdapter;
pub use transit_adapter::TransitAdapter;
