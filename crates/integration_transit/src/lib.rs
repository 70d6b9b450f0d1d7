//! Transit integration for NearStop
//!
//! Provides nearest-stop lookup via the [MBTA v3 API](https://api-v3.mbta.com)
//! and place-name geocoding via
//! [Mapbox Search Box](https://docs.mapbox.com/api/search/search-box/).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with other integration crates.
//! [`StopClient`] defines the interface for nearest-stop lookup, implemented by
//! [`MbtaStopClient`]. [`GeocodingClient`] handles place-to-coordinate conversion
//! via [`MapboxGeocodingClient`].
//!
//! Both clients check their credential on every call, so a client can be built
//! from an incomplete configuration and only fails once it is actually used.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_transit::{MapboxConfig, MapboxGeocodingClient, GeocodingClient};
//! use integration_transit::{MbtaConfig, MbtaStopClient, StopClient};
//!
//! let geocoder = MapboxGeocodingClient::new(&MapboxConfig::default())?;
//! let stops = MbtaStopClient::new(&MbtaConfig::default())?;
//!
//! let location = geocoder.geocode("Boston Common").await?;
//! let stop = stops.nearest_stop(location.latitude(), location.longitude()).await?;
//! ```

mod client;
mod config;
mod error;
mod geocoding;
mod models;

pub use client::{MbtaStopClient, StopClient};
pub use config::MbtaConfig;
pub use error::TransitError;
pub use geocoding::{GeocodingClient, GeocodingError, MapboxConfig, MapboxGeocodingClient};
pub use models::Stop;
