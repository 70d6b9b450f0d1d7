//! Transit data models
//!
//! Typed representation of a stop as returned by the MBTA v3 JSON:API
//! `stops` resource, plus the raw wire types it is decoded from.

use domain::WheelchairAccessibility;
use serde::{Deserialize, Serialize};

/// A transit stop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stop {
    /// MBTA stop identifier (e.g. "place-pktrm")
    pub id: String,
    /// Display name
    pub name: String,
    /// Raw GTFS `wheelchair_boarding` code, if it was an integer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wheelchair_boarding: Option<i64>,
}

impl Stop {
    /// Accessibility derived from the boarding code
    #[must_use]
    pub const fn accessibility(&self) -> WheelchairAccessibility {
        WheelchairAccessibility::from_boarding_code(self.wheelchair_boarding)
    }
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
pub(crate) struct RawStopResource {
    pub id: Option<String>,
    pub attributes: Option<RawStopAttributes>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawStopAttributes {
    pub name: Option<String>,
    /// Kept loose so unexpected encodings degrade to "unknown"
    pub wheelchair_boarding: Option<serde_json::Value>,
}

impl RawStopResource {
    /// Convert into a typed stop; `None` when the resource has no name
    pub(crate) fn into_stop(self) -> Option<Stop> {
        let attributes = self.attributes?;
        let name = attributes.name.filter(|n| !n.is_empty())?;

        Some(Stop {
            id: self.id.unwrap_or_default(),
            name,
            wheelchair_boarding: attributes
                .wheelchair_boarding
                .as_ref()
                .and_then(serde_json::Value::as_i64),
        })
    }
}
