//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Place name was empty after trimming whitespace
    #[error("Please enter a valid place name.")]
    EmptyPlace,

    /// Coordinates outside the valid WGS84 range
    #[error("Invalid coordinates: ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_place_message_is_user_facing() {
        assert_eq!(
            DomainError::EmptyPlace.to_string(),
            "Please enter a valid place name."
        );
    }

    #[test]
    fn invalid_coordinates_includes_values() {
        let err = DomainError::InvalidCoordinates {
            latitude: 91.0,
            longitude: 10.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("91"));
        assert!(msg.contains("10"));
    }
}
