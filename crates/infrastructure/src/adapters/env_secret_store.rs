//! Environment-based secret store adapter
//!
//! Credential keys such as `mbta/api_key` are looked up as the variable
//! `MBTA_API_KEY`, matching how the Mapbox and MBTA keys are usually exported.

use application::{error::ApplicationError, ports::SecretStorePort};
use async_trait::async_trait;
use std::env;
use tracing::{debug, instrument};

/// Secret store that reads credentials from the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSecretStore;

impl EnvSecretStore {
    /// Create a new environment secret store
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Variable name for a credential key: separators become `_`, then uppercase
fn env_var_name(key: &str) -> String {
    key.replace(['/', '-', '.'], "_").to_uppercase()
}

#[async_trait]
impl SecretStorePort for EnvSecretStore {
    #[instrument(skip(self), fields(env_var))]
    async fn get_secret(&self, key: &str) -> Result<String, ApplicationError> {
        let env_var = env_var_name(key);
        tracing::Span::current().record("env_var", env_var.as_str());

        env::var(&env_var).map_err(|e| match e {
            env::VarError::NotPresent => {
                debug!("Credential not set in environment");
                ApplicationError::NotFound(format!("{env_var} is not set"))
            },
            env::VarError::NotUnicode(_) => {
                ApplicationError::Configuration(format!("{env_var} is not valid UTF-8"))
            },
        })
    }
}
