//! Port for secret storage and retrieval
//!
//! Implementations can read credentials from environment variables or any
//! other backend that maps a key to a string.

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Port for looking up credentials by key (e.g. `mbta/api_key`)
#[async_trait]
pub trait SecretStorePort: Send + Sync {
    /// Retrieve a secret by its key
    ///
    /// Returns `NotFound` when the key is not set.
    async fn get_secret(&self, key: &str) -> Result<String, ApplicationError>;
}
