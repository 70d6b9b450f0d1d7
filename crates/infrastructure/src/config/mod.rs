//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `integrations`: Mapbox geocoding and MBTA stops
//!
//! Sources are layered: built-in defaults, then an optional `config.toml`,
//! then `NEARSTOP_*` environment variables. Credentials still missing after
//! that are resolved from a [`SecretStorePort`].

mod integrations;
mod server;

use application::ports::SecretStorePort;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

pub use integrations::{MapboxAppConfig, MbtaAppConfig};
pub use server::ServerConfig;

use crate::templates::TemplateConfig;

/// Secret store key for the Mapbox access token (`MAPBOX_API_KEY`)
pub const MAPBOX_SECRET_KEY: &str = "mapbox/api_key";

/// Secret store key for the MBTA API key (`MBTA_API_KEY`)
pub const MBTA_SECRET_KEY: &str = "mbta/api_key";

/// Application environment (development or production)
///
/// Controls how much detail error responses expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - internal error details are shown
    #[default]
    Development,
    /// Production environment - internal error details are hidden
    Production,
}

impl Environment {
    /// Whether internal error details may be returned to clients
    #[must_use]
    pub const fn expose_internal_errors(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development or production)
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Mapbox forward geocoding
    #[serde(default)]
    pub mapbox: MapboxAppConfig,

    /// MBTA v3 stops
    #[serde(default)]
    pub mbta: MbtaAppConfig,

    /// HTML page templates
    #[serde(default)]
    pub templates: TemplateConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and the environment
    ///
    /// Nested keys use a double underscore, e.g. `NEARSTOP_SERVER__PORT` or
    /// `NEARSTOP_MBTA__API_KEY`.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the given file (extension optional) and the environment
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            // Load from file if exists
            .add_source(config::File::with_name(path).required(false))
            // Override with environment variables
            .add_source(
                config::Environment::with_prefix("NEARSTOP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Resolve credentials from a secret store into the config
    ///
    /// Only populates fields that are currently empty, so values from
    /// `config.toml` or `NEARSTOP_*` variables take precedence. A missing
    /// secret is not an error here; it surfaces when the client is used.
    pub async fn resolve_secrets(&mut self, store: &dyn SecretStorePort) {
        info!("Resolving credentials from secret store");

        if !self.mapbox.has_access_token() {
            if let Some(token) = lookup_secret(store, MAPBOX_SECRET_KEY).await {
                self.mapbox.access_token = Some(token);
                debug!("Loaded mapbox.access_token from secret store");
            }
        }

        if !self.mbta.has_api_key() {
            if let Some(key) = lookup_secret(store, MBTA_SECRET_KEY).await {
                self.mbta.api_key = Some(key);
                debug!("Loaded mbta.api_key from secret store");
            }
        }

        for name in self.missing_credentials() {
            warn!(credential = name, "Credential not configured; lookups will fail");
        }
    }

    /// Names of the credentials that are still unset
    #[must_use]
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.mapbox.has_access_token() {
            missing.push("MAPBOX_API_KEY");
        }
        if !self.mbta.has_api_key() {
            missing.push("MBTA_API_KEY");
        }
        missing
    }

    /// Validate the configuration
    ///
    /// Missing credentials are not reported here.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.server.port == 0 {
            errors.push("server.port must be greater than 0".to_string());
        }
        if let Err(e) = self.mapbox.to_client_config().validate() {
            errors.push(format!("mapbox: {e}"));
        }
        if let Err(e) = self.mbta.to_client_config().validate() {
            errors.push(format!("mbta: {e}"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

async fn lookup_secret(store: &dyn SecretStorePort, key: &str) -> Option<SecretString> {
    match store.get_secret(key).await {
        Ok(value) if !value.trim().is_empty() => Some(SecretString::from(value)),
        Ok(_) => None,
        Err(e) => {
            debug!(key = %key, error = %e, "Secret not available");
            None
        },
    }
}
