//! State store adapter
//!
//! `StateStore` owns the single connection to the key-value backend. It is
//! built once at startup and then shared by every handler. If the backend
//! cannot be reached within the retry budget the adapter stays degraded for
//! the rest of the process. Reads then resolve to defaults and writes are
//! dropped. There is no reconnection after startup.

pub mod memory;
pub mod redis_store;

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::application::errors::StorageError;
use crate::domain::traits::KeyValueStore;
use crate::infrastructure::config::StoreConfig;

pub use memory::MemoryStore;
pub use redis_store::{EndpointKind, RedisStore, StoreEndpoint};

/// Longest error text kept in logs and in `last_error`
const ERROR_SUMMARY_CHARS: usize = 100;

pub(crate) fn summarize(err: &StorageError) -> String {
    let text = err.to_string();
    if text.chars().count() > ERROR_SUMMARY_CHARS {
        let cut: String = text.chars().take(ERROR_SUMMARY_CHARS).collect();
        format!("{}...", cut)
    } else {
        text
    }
}

/// Snapshot of the connection state for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStatus {
    pub available: bool,
    pub attempts: u32,
    pub endpoint: Option<String>,
    pub last_error: Option<String>,
}

pub struct StateStore {
    backend: Option<Arc<dyn KeyValueStore>>,
    endpoint: Option<String>,
    attempts: u32,
    last_error: Mutex<Option<String>>,
}

impl StateStore {
    /// Adapter with no backend at all
    pub fn degraded() -> Self {
        Self {
            backend: None,
            endpoint: None,
            attempts: 0,
            last_error: Mutex::new(None),
        }
    }

    /// Adapter over an already connected backend
    pub fn from_backend(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend: Some(backend),
            endpoint: None,
            attempts: 1,
            last_error: Mutex::new(None),
        }
    }

    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// Connect using the configured endpoint, or come up degraded
    pub async fn connect(config: &StoreConfig) -> Self {
        let Some(endpoint) = config.endpoint() else {
            tracing::warn!("REDIS_URL not configured, running without state store");
            return Self::degraded();
        };

        tracing::info!("Redis URL type: {}", endpoint.kind);
        let url = endpoint.url.clone();
        let kind = endpoint.kind;

        let store = match kind {
            EndpointKind::Memory => {
                Self::connect_with(config.max_attempts, config.retry_delay(), || async {
                    Ok::<_, StorageError>(MemoryStore::new())
                })
                .await
            }
            EndpointKind::Tls | EndpointKind::Plain => {
                Self::connect_with(config.max_attempts, config.retry_delay(), move || {
                    RedisStore::connect(endpoint.clone())
                })
                .await
            }
        };

        store.with_endpoint(url)
    }

    /// Bounded retry: up to `max_attempts` dial+PING rounds with `delay`
    /// between them.
    pub async fn connect_with<F, Fut, S>(max_attempts: u32, delay: Duration, mut connect: F) -> Self
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<S, StorageError>>,
        S: KeyValueStore + 'static,
    {
        let max_attempts = max_attempts.max(1);
        let mut last_error = None;

        for attempt in 1..=max_attempts {
            let result = match connect().await {
                Ok(backend) => backend.ping().await.map(|_| backend),
                Err(e) => Err(e),
            };

            match result {
                Ok(backend) => {
                    tracing::info!("Redis connected successfully (attempt {})", attempt);
                    let store = Self {
                        backend: Some(Arc::new(backend)),
                        endpoint: None,
                        attempts: attempt,
                        last_error: Mutex::new(None),
                    };
                    store.self_test().await;
                    return store;
                }
                Err(e) => {
                    let summary = summarize(&e);
                    tracing::warn!("Redis connection attempt {} failed: {}", attempt, summary);
                    last_error = Some(summary);
                }
            }

            if attempt < max_attempts {
                tokio::time::sleep(delay).await;
            }
        }

        tracing::warn!(
            "Redis unavailable after {} attempts, running in degraded mode",
            max_attempts
        );
        Self {
            backend: None,
            endpoint: None,
            attempts: max_attempts,
            last_error: Mutex::new(last_error),
        }
    }

    /// Write/read probe run once after connecting; failures are only logged
    async fn self_test(&self) {
        let Some(backend) = &self.backend else { return };

        let probe = async {
            backend.set("test_connection", "ok", Some(Duration::from_secs(60))).await?;
            let value = backend.get("test_connection").await?;
            if value.as_deref() == Some("ok") {
                tracing::info!("Redis read/write test successful");
                backend.set("bot_status", "online", Some(Duration::from_secs(3600))).await?;
                tracing::info!("Redis bot status set successfully");
            } else {
                tracing::warn!("Redis read test failed");
            }
            Ok::<_, StorageError>(())
        };

        if let Err(e) = probe.await {
            self.record("self_test", "test_connection", &e);
        }
    }

    fn record(&self, op: &str, key: &str, err: &StorageError) {
        let summary = summarize(err);
        tracing::warn!("Redis {} on {} failed: {}", op, key, summary);
        if let Ok(mut last) = self.last_error.lock() {
            *last = Some(summary);
        }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub fn status(&self) -> StoreStatus {
        StoreStatus {
            available: self.is_available(),
            attempts: self.attempts,
            endpoint: self.endpoint.clone(),
            last_error: self.last_error.lock().ok().and_then(|l| l.clone()),
        }
    }

    /// Stored integer, 0 when missing, unparsable or unavailable
    pub async fn get_counter(&self, key: &str) -> i64 {
        let Some(backend) = &self.backend else { return 0 };
        match backend.get(key).await {
            Ok(Some(value)) => value.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Counter {} holds non-integer value {:?}", key, value);
                0
            }),
            Ok(None) => 0,
            Err(e) => {
                self.record("GET", key, &e);
                0
            }
        }
    }

    pub async fn increment_counter(&self, key: &str) {
        let Some(backend) = &self.backend else { return };
        if let Err(e) = backend.incr(key).await {
            self.record("INCR", key, &e);
        }
    }

    /// Missing key and failed read both give `None`
    pub async fn get_string(&self, key: &str) -> Option<String> {
        self.try_get_string(key).await.ok().flatten()
    }

    /// Like `get_string`, but a failed read is `Err` so it cannot be mistaken
    /// for a missing key. The failure is already logged and recorded.
    pub async fn try_get_string(&self, key: &str) -> Result<Option<String>, StorageError> {
        let Some(backend) = &self.backend else {
            return Err(StorageError::Connection("state store not connected".to_string()));
        };
        backend.get(key).await.map_err(|e| {
            self.record("GET", key, &e);
            e
        })
    }

    /// Best-effort write; true when the backend acknowledged it
    pub async fn set_string(&self, key: &str, value: &str, ttl: Option<Duration>) -> bool {
        let Some(backend) = &self.backend else { return false };
        match backend.set(key, value, ttl).await {
            Ok(()) => true,
            Err(e) => {
                self.record("SET", key, &e);
                false
            }
        }
    }

    /// Write only if the key does not exist yet; true when this call wrote it
    pub async fn set_string_if_absent(&self, key: &str, value: &str) -> bool {
        let Some(backend) = &self.backend else { return false };
        match backend.set_nx(key, value).await {
            Ok(written) => written,
            Err(e) => {
                self.record("SETNX", key, &e);
                false
            }
        }
    }

    pub async fn add_to_set(&self, key: &str, member: &str) {
        let Some(backend) = &self.backend else { return };
        if let Err(e) = backend.sadd(key, member).await {
            self.record("SADD", key, &e);
        }
    }

    pub async fn set_size(&self, key: &str) -> i64 {
        let Some(backend) = &self.backend else { return 0 };
        match backend.scard(key).await {
            Ok(n) => n,
            Err(e) => {
                self.record("SCARD", key, &e);
                0
            }
        }
    }

    pub async fn ping(&self) -> bool {
        let Some(backend) = &self.backend else { return false };
        match backend.ping().await {
            Ok(()) => true,
            Err(e) => {
                self.record("PING", "-", &e);
                false
            }
        }
    }

    pub async fn info(&self) -> HashMap<String, String> {
        let Some(backend) = &self.backend else { return HashMap::new() };
        match backend.info().await {
            Ok(info) => info,
            Err(e) => {
                self.record("INFO", "-", &e);
                HashMap::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn test_degraded_defaults() {
        let store = StateStore::degraded();
        assert!(!store.is_available());
        assert_eq!(store.get_counter("c").await, 0);
        assert_eq!(store.get_string("k").await, None);
        assert_eq!(store.set_size("s").await, 0);
        assert!(!store.ping().await);
        assert!(store.info().await.is_empty());

        store.increment_counter("c").await;
        assert!(!store.set_string("k", "v", None).await);
        store.add_to_set("s", "m").await;
    }

    #[tokio::test]
    async fn test_retry_exhaustion_degrades() {
        let calls = AtomicU32::new(0);
        let store = StateStore::connect_with(3, Duration::ZERO, || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err::<MemoryStore, _>(StorageError::Connection("refused".to_string())) }
        })
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        let status = store.status();
        assert!(!status.available);
        assert_eq!(status.attempts, 3);
        assert_eq!(status.last_error.as_deref(), Some("Connection failed: refused"));
    }

    #[tokio::test]
    async fn test_retry_succeeds_on_later_attempt() {
        let calls = AtomicU32::new(0);
        let store = StateStore::connect_with(3, Duration::ZERO, || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n == 0 {
                    Err(StorageError::Connection("not yet".to_string()))
                } else {
                    Ok(MemoryStore::new())
                }
            }
        })
        .await;

        assert!(store.is_available());
        assert_eq!(store.status().attempts, 2);
        assert_eq!(store.get_string("bot_status").await.as_deref(), Some("online"));
    }

    #[tokio::test]
    async fn test_failed_ping_counts_as_failed_attempt() {
        let store = StateStore::connect_with(2, Duration::ZERO, || async {
            let backend = MemoryStore::new();
            backend.set_failing(true);
            Ok::<_, StorageError>(backend)
        })
        .await;

        assert!(!store.is_available());
        assert_eq!(store.status().attempts, 2);
    }

    #[tokio::test]
    async fn test_operation_failures_are_contained() {
        let backend = MemoryStore::new();
        let store = StateStore::from_backend(Arc::new(backend.clone()));

        store.increment_counter("c").await;
        assert_eq!(store.get_counter("c").await, 1);

        backend.set_failing(true);
        store.increment_counter("c").await;
        assert_eq!(store.get_counter("c").await, 0);
        assert_eq!(store.get_string("c").await, None);
        assert!(!store.ping().await);
        assert!(store.status().last_error.is_some());
        // still counts as connected: no reconnection logic either way
        assert!(store.is_available());

        backend.set_failing(false);
        assert_eq!(store.get_counter("c").await, 1);
    }

    #[tokio::test]
    async fn test_non_integer_counter_reads_zero() {
        let backend = MemoryStore::new();
        let store = StateStore::from_backend(Arc::new(backend.clone()));
        store.set_string("c", "lots", None).await;
        assert_eq!(store.get_counter("c").await, 0);
    }

    #[tokio::test]
    async fn test_memory_endpoint() {
        let config = StoreConfig {
            url: Some("memory://".to_string()),
            ..StoreConfig::default()
        };
        let store = StateStore::connect(&config).await;
        assert!(store.is_available());
        assert_eq!(store.status().endpoint.as_deref(), Some("memory://"));
    }

    #[tokio::test]
    async fn test_no_url_is_degraded() {
        let store = StateStore::connect(&StoreConfig::default()).await;
        assert!(!store.is_available());
        assert_eq!(store.status().attempts, 0);
    }

    #[test]
    fn test_summary_truncation() {
        let long = StorageError::Operation("x".repeat(300));
        let summary = summarize(&long);
        assert_eq!(summary.chars().count(), ERROR_SUMMARY_CHARS + 3);
        assert!(summary.ends_with("..."));
    }
}
