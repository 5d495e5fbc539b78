//! Redis backend

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, AsyncConnectionConfig};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use crate::application::errors::StorageError;
use crate::domain::traits::KeyValueStore;

/// Endpoint flavour, chosen from the URL scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    /// `rediss://` - TLS, longer timeouts
    Tls,
    /// `redis://` and anything else the client accepts
    Plain,
    /// `memory://` - in-process store, nothing to dial
    Memory,
}

impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointKind::Tls => write!(f, "SSL"),
            EndpointKind::Plain => write!(f, "Standard"),
            EndpointKind::Memory => write!(f, "Memory"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEndpoint {
    pub url: String,
    pub kind: EndpointKind,
    pub timeout: Duration,
}

impl StoreEndpoint {
    pub fn parse(url: impl Into<String>, tls_timeout: Duration, plain_timeout: Duration) -> Self {
        let url = url.into();
        let scheme = url.to_ascii_lowercase();
        let (kind, timeout) = if scheme.starts_with("rediss://") {
            (EndpointKind::Tls, tls_timeout)
        } else if scheme.starts_with("memory://") {
            (EndpointKind::Memory, Duration::ZERO)
        } else {
            (EndpointKind::Plain, plain_timeout)
        };
        Self { url, kind, timeout }
    }
}

/// Redis store over a multiplexed async connection.
///
/// TCP keep-alive comes from the client's default `keep-alive` feature.
#[derive(Clone)]
pub struct RedisStore {
    conn: MultiplexedConnection,
}

impl RedisStore {
    pub async fn connect(endpoint: StoreEndpoint) -> Result<Self, StorageError> {
        let client = redis::Client::open(endpoint.url.as_str())
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        let config = AsyncConnectionConfig::new()
            .set_connection_timeout(endpoint.timeout)
            .set_response_timeout(endpoint.timeout);
        let conn = client
            .get_multiplexed_async_connection_with_config(&config)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(Self { conn })
    }
}

fn op_error(e: redis::RedisError) -> StorageError {
    if e.is_connection_dropped() || e.is_connection_refusal() || e.is_timeout() {
        StorageError::Connection(e.to_string())
    } else {
        StorageError::Operation(e.to_string())
    }
}

/// Parse the `key:value` lines of an `INFO` reply
pub fn parse_info(raw: &str) -> HashMap<String, String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn ping(&self) -> Result<(), StorageError> {
        let mut conn = self.conn.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await.map_err(op_error)?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut conn = self.conn.clone();
        conn.get(key).await.map_err(op_error)
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), StorageError> {
        let mut conn = self.conn.clone();
        match ttl {
            Some(ttl) => {
                let _: () = conn
                    .set_ex(key, value, ttl.as_secs().max(1))
                    .await
                    .map_err(op_error)?;
            }
            None => {
                let _: () = conn.set(key, value).await.map_err(op_error)?;
            }
        }
        Ok(())
    }

    async fn set_nx(&self, key: &str, value: &str) -> Result<bool, StorageError> {
        let mut conn = self.conn.clone();
        conn.set_nx(key, value).await.map_err(op_error)
    }

    async fn incr(&self, key: &str) -> Result<i64, StorageError> {
        let mut conn = self.conn.clone();
        conn.incr(key, 1i64).await.map_err(op_error)
    }

    async fn sadd(&self, key: &str, member: &str) -> Result<bool, StorageError> {
        let mut conn = self.conn.clone();
        let added: i64 = conn.sadd(key, member).await.map_err(op_error)?;
        Ok(added > 0)
    }

    async fn scard(&self, key: &str) -> Result<i64, StorageError> {
        let mut conn = self.conn.clone();
        conn.scard(key).await.map_err(op_error)
    }

    async fn info(&self) -> Result<HashMap<String, String>, StorageError> {
        let mut conn = self.conn.clone();
        let raw: String = redis::cmd("INFO").query_async(&mut conn).await.map_err(op_error)?;
        Ok(parse_info(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_kind_from_scheme() {
        let tls = Duration::from_secs(30);
        let plain = Duration::from_secs(10);

        let e = StoreEndpoint::parse("rediss://:pw@host:6380", tls, plain);
        assert_eq!(e.kind, EndpointKind::Tls);
        assert_eq!(e.timeout, tls);

        let e = StoreEndpoint::parse("redis://localhost:6379/0", tls, plain);
        assert_eq!(e.kind, EndpointKind::Plain);
        assert_eq!(e.timeout, plain);

        assert_eq!(StoreEndpoint::parse("memory://", tls, plain).kind, EndpointKind::Memory);
    }

    #[test]
    fn test_parse_info() {
        let raw = "# Server\r\nredis_version:7.2.4\r\n\r\n# Memory\r\nused_memory_human:1.02M\r\nconnected_clients:3\r\n";
        let info = parse_info(raw);
        assert_eq!(info.get("redis_version").map(String::as_str), Some("7.2.4"));
        assert_eq!(info.get("used_memory_human").map(String::as_str), Some("1.02M"));
        assert_eq!(info.get("connected_clients").map(String::as_str), Some("3"));
        assert_eq!(info.len(), 3);
    }

    #[tokio::test]
    async fn test_connect_refused_is_connection_error() {
        let endpoint = StoreEndpoint::parse(
            "redis://127.0.0.1:1",
            Duration::from_secs(1),
            Duration::from_secs(1),
        );
        assert!(matches!(
            RedisStore::connect(endpoint).await,
            Err(StorageError::Connection(_))
        ));
    }
}
