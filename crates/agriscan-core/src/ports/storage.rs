use async_trait::async_trait;
use std::time::Duration;

use crate::error::StoreError;

/// Key-value storage holding JSON documents (in-memory, Redis).
///
/// Values are opaque strings; the services own the JSON layout of each key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored at `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Set a value, optionally expiring after `ttl`.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), StoreError>;

    /// Delete a key. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Check if a key exists.
    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key).await?.is_some())
    }

    /// Short name of the backend, used in logs.
    fn backend(&self) -> &'static str;
}
