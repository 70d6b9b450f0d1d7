//! Place query value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A free-text place name, guaranteed non-empty after trimming
///
/// This is the only input the lookup pipeline accepts; constructing one
/// is the validation step that keeps blank input away from the geocoder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlaceQuery(String);

impl PlaceQuery {
    /// Parse a raw user-supplied place name
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyPlace` if the input is empty or whitespace only.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyPlace);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The trimmed place name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PlaceQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PlaceQuery {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PlaceQuery> for String {
    fn from(query: PlaceQuery) -> Self {
        query.0
    }
}
