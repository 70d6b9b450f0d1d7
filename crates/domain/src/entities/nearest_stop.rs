//! Nearest transit stop entity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wheelchair accessibility of a stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WheelchairAccessibility {
    /// Boarding is wheelchair accessible
    Accessible,
    /// Boarding is not wheelchair accessible
    NotAccessible,
    /// No accessibility information
    #[default]
    Unknown,
}

impl WheelchairAccessibility {
    /// Map a GTFS `wheelchair_boarding` code to an accessibility state
    ///
    /// `1` is accessible, `2` is not accessible. `0`, a missing value and
    /// anything else are unknown.
    #[must_use]
    pub const fn from_boarding_code(code: Option<i64>) -> Self {
        match code {
            Some(1) => Self::Accessible,
            Some(2) => Self::NotAccessible,
            _ => Self::Unknown,
        }
    }

    /// `Some(true)` / `Some(false)` when known, `None` otherwise
    #[must_use]
    pub const fn is_accessible(&self) -> Option<bool> {
        match self {
            Self::Accessible => Some(true),
            Self::NotAccessible => Some(false),
            Self::Unknown => None,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Accessible => "Wheelchair accessible",
            Self::NotAccessible => "Not wheelchair accessible",
            Self::Unknown => "Accessibility unknown",
        }
    }
}

impl fmt::Display for WheelchairAccessibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The stop closest to a location, as reported by the transit service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearestStop {
    /// Display name of the stop (e.g. "Park Street")
    pub name: String,
    /// Wheelchair boarding status
    pub wheelchair_accessible: WheelchairAccessibility,
}

impl NearestStop {
    /// Create a new stop result
    #[must_use]
    pub fn new(name: impl Into<String>, wheelchair_accessible: WheelchairAccessibility) -> Self {
        Self {
            name: name.into(),
            wheelchair_accessible,
        }
    }
}

impl fmt::Display for NearestStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.wheelchair_accessible)
    }
}
