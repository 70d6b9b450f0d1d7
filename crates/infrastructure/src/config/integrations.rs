//! Integration configurations: Mapbox geocoding and MBTA stops.

use integration_transit::{MapboxConfig, MbtaConfig};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

// ==============================
// Mapbox Configuration
// ==============================

/// Mapbox forward-geocoding configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct MapboxAppConfig {
    /// Forward-geocoding endpoint URL
    #[serde(default = "default_mapbox_base_url")]
    pub base_url: String,

    /// Access token (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub access_token: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_mapbox_base_url() -> String {
    MapboxConfig::default().base_url
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for MapboxAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_mapbox_base_url(),
            access_token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for MapboxAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxAppConfig")
            .field("base_url", &self.base_url)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl MapboxAppConfig {
    /// Whether an access token is present
    #[must_use]
    pub fn has_access_token(&self) -> bool {
        self.access_token
            .as_ref()
            .is_some_and(|t| !t.expose_secret().trim().is_empty())
    }

    /// Convert to the client configuration
    #[must_use]
    pub fn to_client_config(&self) -> MapboxConfig {
        MapboxConfig {
            base_url: self.base_url.clone(),
            access_token: self
                .access_token
                .as_ref()
                .map(|t| t.expose_secret().to_string()),
            timeout_secs: self.timeout_secs,
        }
    }
}

// ==============================
// MBTA Configuration
// ==============================

/// MBTA v3 stops configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct MbtaAppConfig {
    /// Stops endpoint URL
    #[serde(default = "default_mbta_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_mbta_base_url() -> String {
    MbtaConfig::default().base_url
}

impl Default for MbtaAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_mbta_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for MbtaAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MbtaAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl MbtaAppConfig {
    /// Whether an API key is present
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Convert to the client configuration
    #[must_use]
    pub fn to_client_config(&self) -> MbtaConfig {
        MbtaConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.as_ref().map(|k| k.expose_secret().to_string()),
            timeout_secs: self.timeout_secs,
        }
    }
}
