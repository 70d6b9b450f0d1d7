//! Transit service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the MBTA v3 stops endpoint
#[derive(Clone, Serialize, Deserialize)]
pub struct MbtaConfig {
    /// Full URL of the stops endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// MBTA API key, checked on every lookup
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api-v3.mbta.com/stops".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for MbtaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for MbtaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MbtaConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl MbtaConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: Some("test-mbta-key".to_string()),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Whether a non-empty API key is present
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Validate the configuration
    ///
    /// A missing API key is not a validation failure; it is reported when
    /// a lookup is attempted.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
