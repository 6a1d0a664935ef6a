use crate::error::GatewayError;
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Ordered-counter storage backing the rate limiter.
///
/// Semantics follow Redis sorted sets: entries are (score, member) pairs per
/// key, where the score is a unix timestamp in seconds and the member is an
/// opaque unique token. The store must be safe for concurrent access.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Remove all entries for `key` with score <= `max_score`.
    async fn prune(&self, key: &str, max_score: i64) -> Result<(), GatewayError>;

    /// Count entries for `key` with score in `[min_score, max_score]`.
    async fn count(&self, key: &str, min_score: i64, max_score: i64) -> Result<u64, GatewayError>;

    /// Insert an entry. The member must be unique per insertion.
    async fn record(&self, key: &str, score: i64, member: &str) -> Result<(), GatewayError>;

    /// Refresh the key's time-to-live.
    async fn expire(&self, key: &str, ttl_secs: i64) -> Result<(), GatewayError>;

    /// Release the underlying connection. Called once, at shutdown.
    async fn close(&self) -> Result<(), GatewayError>;
}

/// Redis-backed counter store.
///
/// Holds one multiplexed connection shared by all in-flight requests; the
/// manager reconnects on its own after transient drops. Individual command
/// failures surface as `RateLimitUnavailable` so the limiter rejects instead
/// of failing open.
pub struct RedisStore {
    manager: ConnectionManager,
}

impl RedisStore {
    pub async fn connect(redis_url: &str) -> Result<Self, GatewayError> {
        let client = redis::Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;
        Ok(Self { manager })
    }

    pub async fn ping(&self) -> Result<(), GatewayError> {
        let mut conn = self.manager.clone();
        redis::cmd("PING").query_async::<_, String>(&mut conn).await?;
        Ok(())
    }
}

#[async_trait]
impl CounterStore for RedisStore {
    async fn prune(&self, key: &str, max_score: i64) -> Result<(), GatewayError> {
        let mut conn = self.manager.clone();
        redis::cmd("ZREMRANGEBYSCORE")
            .arg(key)
            .arg("-inf")
            .arg(max_score)
            .query_async::<_, ()>(&mut conn)
            .await?;
        Ok(())
    }

    async fn count(&self, key: &str, min_score: i64, max_score: i64) -> Result<u64, GatewayError> {
        let mut conn = self.manager.clone();
        let count: u64 = redis::cmd("ZCOUNT")
            .arg(key)
            .arg(min_score)
            .arg(max_score)
            .query_async(&mut conn)
            .await?;
        Ok(count)
    }

    async fn record(&self, key: &str, score: i64, member: &str) -> Result<(), GatewayError> {
        let mut conn = self.manager.clone();
        redis::cmd("ZADD")
            .arg(key)
            .arg(score)
            .arg(member)
            .query_async::<_, ()>(&mut conn)
            .await?;
        Ok(())
    }

    async fn expire(&self, key: &str, ttl_secs: i64) -> Result<(), GatewayError> {
        let mut conn = self.manager.clone();
        redis::cmd("EXPIRE")
            .arg(key)
            .arg(ttl_secs)
            .query_async::<_, ()>(&mut conn)
            .await?;
        Ok(())
    }

    async fn close(&self) -> Result<(), GatewayError> {
        // The multiplexed connection is released when the manager drops;
        // nothing to flush on our side.
        tracing::debug!(target: "api_gateway::store", "counter store connection released");
        Ok(())
    }
}

/// In-memory counter store for local development and tests.
///
/// Not suitable for production: state is per-process, so limits are not
/// shared across gateway instances.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<(i64, String)>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CounterStore for MemoryStore {
    async fn prune(&self, key: &str, max_score: i64) -> Result<(), GatewayError> {
        let mut entries = self.entries.lock().await;
        if let Some(set) = entries.get_mut(key) {
            set.retain(|(score, _)| *score > max_score);
        }
        Ok(())
    }

    async fn count(&self, key: &str, min_score: i64, max_score: i64) -> Result<u64, GatewayError> {
        let entries = self.entries.lock().await;
        Ok(entries
            .get(key)
            .map(|set| {
                set.iter()
                    .filter(|(score, _)| *score >= min_score && *score <= max_score)
                    .count() as u64
            })
            .unwrap_or(0))
    }

    async fn record(&self, key: &str, score: i64, member: &str) -> Result<(), GatewayError> {
        let mut entries = self.entries.lock().await;
        let set = entries.entry(key.to_string()).or_default();
        // Sorted-set semantics: re-adding an existing member updates its
        // score instead of growing the set.
        if let Some(existing) = set.iter_mut().find(|(_, m)| m == member) {
            existing.0 = score;
        } else {
            set.push((score, member.to_string()));
        }
        Ok(())
    }

    async fn expire(&self, _key: &str, _ttl_secs: i64) -> Result<(), GatewayError> {
        // TTL is only a Redis housekeeping concern; pruning covers cleanup here.
        Ok(())
    }

    async fn close(&self) -> Result<(), GatewayError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_counts_within_range() {
        let store = MemoryStore::new();
        store.record("k", 10, "a").await.unwrap();
        store.record("k", 20, "b").await.unwrap();
        store.record("k", 30, "c").await.unwrap();

        assert_eq!(store.count("k", 15, 30).await.unwrap(), 2);
        assert_eq!(store.count("k", 0, 100).await.unwrap(), 3);
        assert_eq!(store.count("missing", 0, 100).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn memory_store_prune_is_inclusive() {
        let store = MemoryStore::new();
        store.record("k", 10, "a").await.unwrap();
        store.record("k", 11, "b").await.unwrap();
        store.prune("k", 10).await.unwrap();

        assert_eq!(store.count("k", 0, 100).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn duplicate_member_updates_score() {
        let store = MemoryStore::new();
        store.record("k", 10, "same").await.unwrap();
        store.record("k", 10, "same").await.unwrap();

        assert_eq!(store.count("k", 0, 100).await.unwrap(), 1);
    }
}
