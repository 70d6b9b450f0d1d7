//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{GeoLocation, NearestStop, PlaceQuery, WheelchairAccessibility};
use proptest::prelude::*;

// ============================================================================
// GeoLocation Property Tests
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let loc = GeoLocation::new(lat, lon);
            prop_assert!(loc.is_ok());

            let loc = loc.unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }

        #[test]
        fn invalid_longitude_rejected(
            lat in -90.0f64..=90.0f64,
            lon in prop_oneof![
                (-1000.0f64..-180.1f64),
                (180.1f64..1000.0f64)
            ]
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }

        #[test]
        fn swapped_pair_outside_latitude_range_is_rejected(
            lon in prop_oneof![
                (-180.0f64..-90.1f64),
                (90.1f64..=180.0f64)
            ],
            lat in -90.0f64..=90.0f64
        ) {
            // A `[lon, lat]` pair read in the wrong order fails validation
            prop_assert!(GeoLocation::new(lon, lat).is_err());
        }
    }

    #[test]
    fn nan_is_rejected() {
        assert!(GeoLocation::new(f64::NAN, 0.0).is_err());
        assert!(GeoLocation::new(0.0, f64::NAN).is_err());
    }
}

// ============================================================================
// PlaceQuery Property Tests
// ============================================================================

mod place_query_tests {
    use super::*;

    proptest! {
        #[test]
        fn whitespace_only_is_rejected(raw in "[ \t\n\r]*") {
            prop_assert!(PlaceQuery::parse(&raw).is_err());
        }

        #[test]
        fn padding_is_trimmed(
            name in "[A-Za-z][A-Za-z ]{0,30}[A-Za-z]",
            left in "[ \t]{0,4}",
            right in "[ \t]{0,4}"
        ) {
            let query = PlaceQuery::parse(&format!("{left}{name}{right}")).unwrap();
            prop_assert_eq!(query.as_str(), name.as_str());
        }
    }
}

// ============================================================================
// Accessibility Property Tests
// ============================================================================

mod accessibility_tests {
    use super::*;

    proptest! {
        #[test]
        fn codes_other_than_one_and_two_are_unknown(code in any::<i64>()) {
            prop_assume!(code != 1 && code != 2);
            prop_assert_eq!(
                WheelchairAccessibility::from_boarding_code(Some(code)),
                WheelchairAccessibility::Unknown
            );
        }

        #[test]
        fn display_includes_stop_name(name in "[A-Za-z ]{1,40}") {
            let stop = NearestStop::new(name.clone(), WheelchairAccessibility::Unknown);
            prop_assert!(stop.to_string().starts_with(&name));
        }
    }
}
