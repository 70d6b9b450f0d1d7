//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod place_query;

pub use geo_location::GeoLocation;
pub use place_query::PlaceQuery;
