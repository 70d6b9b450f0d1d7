//! Geographic location value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A geographic location with latitude and longitude
///
/// Always stored in `(latitude, longitude)` order, regardless of the
/// ordering used on the wire by whichever service produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

impl GeoLocation {
    /// Create a new location with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let loc = GeoLocation::new(42.3555, -71.0695).expect("valid coordinates");
        assert!((loc.latitude() - 42.3555).abs() < f64::EPSILON);
        assert!((loc.longitude() - -71.0695).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(GeoLocation::new(90.0, 180.0).is_ok());
        assert!(GeoLocation::new(-90.0, -180.0).is_ok());
        assert!(GeoLocation::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        assert!(GeoLocation::new(91.0, 0.0).is_err());
        assert!(GeoLocation::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn test_invalid_longitude() {
        assert!(GeoLocation::new(0.0, 181.0).is_err());
        assert!(GeoLocation::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_nan_rejected() {
        assert!(GeoLocation::new(f64::NAN, 0.0).is_err());
        assert!(GeoLocation::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_display() {
        let loc = GeoLocation::new(42.3555, -71.0695).expect("valid");
        assert_eq!(loc.to_string(), "42.355500, -71.069500");
    }

    #[test]
    fn test_serialization() {
        let loc = GeoLocation::new(42.3555, -71.0695).expect("valid");
        let json = serde_json::to_string(&loc).expect("serialize");
        assert!(json.contains("\"latitude\":42.3555"));

        let deserialized: GeoLocation = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(loc, deserialized);
    }
}
