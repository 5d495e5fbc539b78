//! In-process key-value store
//!
//! Backs the `memory://` endpoint for local runs and stands in for Redis in
//! tests. `set_failing` makes every call error so degraded paths can be
//! exercised without a network.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::application::errors::StorageError;
use crate::domain::traits::KeyValueStore;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |t| t > now)
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    kv: Arc<RwLock<HashMap<String, Entry>>>,
    sets: Arc<RwLock<HashMap<String, HashSet<String>>>>,
    failing: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail (or succeed again)
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StorageError::Operation("memory store forced failure".to_string()))
        } else {
            Ok(())
        }
    }

    /// Live keys whose name starts with `prefix`
    pub async fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        let now = Instant::now();
        let kv = self.kv.read().await;
        let mut keys: Vec<String> = kv
            .iter()
            .filter(|(k, e)| k.starts_with(prefix) && e.is_live(now))
            .map(|(k, _)| k.clone())
            .collect();
        keys.sort();
        keys
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn ping(&self) -> Result<(), StorageError> {
        self.check()
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        let kv = self.kv.read().await;
        Ok(kv
            .get(key)
            .filter(|e| e.is_live(Instant::now()))
            .map(|e| e.value.clone()))
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), StorageError> {
        self.check()?;
        let mut kv = self.kv.write().await;
        kv.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: ttl.map(|d| Instant::now() + d),
            },
        );
        Ok(())
    }

    async fn set_nx(&self, key: &str, value: &str) -> Result<bool, StorageError> {
        self.check()?;
        let now = Instant::now();
        let mut kv = self.kv.write().await;
        if kv.get(key).is_some_and(|e| e.is_live(now)) {
            return Ok(false);
        }
        kv.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: None,
            },
        );
        Ok(true)
    }

    async fn incr(&self, key: &str) -> Result<i64, StorageError> {
        self.check()?;
        let now = Instant::now();
        let mut kv = self.kv.write().await;
        let entry = kv
            .entry(key.to_string())
            .or_insert_with(|| Entry { value: "0".to_string(), expires_at: None });
        if !entry.is_live(now) {
            *entry = Entry { value: "0".to_string(), expires_at: None };
        }

        let current: i64 = entry
            .value
            .parse()
            .map_err(|_| StorageError::Operation("value is not an integer or out of range".to_string()))?;
        let next = current
            .checked_add(1)
            .ok_or_else(|| StorageError::Operation("increment would overflow".to_string()))?;
        entry.value = next.to_string();
        Ok(next)
    }

    async fn sadd(&self, key: &str, member: &str) -> Result<bool, StorageError> {
        self.check()?;
        let mut sets = self.sets.write().await;
        Ok(sets.entry(key.to_string()).or_default().insert(member.to_string()))
    }

    async fn scard(&self, key: &str) -> Result<i64, StorageError> {
        self.check()?;
        let sets = self.sets.read().await;
        Ok(sets.get(key).map_or(0, |s| s.len() as i64))
    }

    async fn info(&self) -> Result<HashMap<String, String>, StorageError> {
        self.check()?;
        let keys = self.kv.read().await.len() + self.sets.read().await.len();
        Ok(HashMap::from([
            ("redis_version".to_string(), "memory".to_string()),
            ("used_memory_human".to_string(), format!("{} keys", keys)),
            ("connected_clients".to_string(), "1".to_string()),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_incr_and_sets() {
        let store = MemoryStore::new();
        assert_eq!(store.incr("c").await.unwrap(), 1);
        assert_eq!(store.incr("c").await.unwrap(), 2);
        assert_eq!(store.get("c").await.unwrap().as_deref(), Some("2"));

        assert!(store.sadd("s", "1").await.unwrap());
        assert!(!store.sadd("s", "1").await.unwrap());
        assert!(store.sadd("s", "2").await.unwrap());
        assert_eq!(store.scard("s").await.unwrap(), 2);
        assert_eq!(store.scard("missing").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_incr_rejects_non_integer() {
        let store = MemoryStore::new();
        store.set("c", "abc", None).await.unwrap();
        assert!(store.incr("c").await.is_err());
    }

    #[tokio::test]
    async fn test_ttl_expiry() {
        let store = MemoryStore::new();
        store.set("gone", "x", Some(Duration::ZERO)).await.unwrap();
        store.set("kept", "y", Some(Duration::from_secs(60))).await.unwrap();

        assert_eq!(store.get("gone").await.unwrap(), None);
        assert_eq!(store.get("kept").await.unwrap().as_deref(), Some("y"));
    }

    #[tokio::test]
    async fn test_set_nx_keeps_existing_value() {
        let store = MemoryStore::new();
        assert!(store.set_nx("d", "2020-01-01").await.unwrap());
        assert!(!store.set_nx("d", "2030-01-01").await.unwrap());
        assert_eq!(store.get("d").await.unwrap().as_deref(), Some("2020-01-01"));

        store.set("gone", "x", Some(Duration::ZERO)).await.unwrap();
        assert!(store.set_nx("gone", "y").await.unwrap());
    }

    #[tokio::test]
    async fn test_forced_failure() {
        let store = MemoryStore::new();
        store.set_failing(true);
        assert!(store.ping().await.is_err());
        assert!(store.get("k").await.is_err());

        store.set_failing(false);
        assert!(store.ping().await.is_ok());
    }
}
