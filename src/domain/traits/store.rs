use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use crate::application::errors::StorageError;

/// Raw key-value backend. Every call may fail; callers that must not fail
/// go through `StateStore`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn ping(&self) -> Result<(), StorageError>;

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// `SET key value [EX ttl]`
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), StorageError>;

    /// `SET key value NX`; true when the key was absent and is now written
    async fn set_nx(&self, key: &str, value: &str) -> Result<bool, StorageError>;

    /// Atomic increment, returns the new value
    async fn incr(&self, key: &str) -> Result<i64, StorageError>;

    /// Returns true when the member was newly added
    async fn sadd(&self, key: &str, member: &str) -> Result<bool, StorageError>;

    async fn scard(&self, key: &str) -> Result<i64, StorageError>;

    /// Server introspection fields (`redis_version`, `used_memory_human`, ...)
    async fn info(&self) -> Result<HashMap<String, String>, StorageError>;
}
