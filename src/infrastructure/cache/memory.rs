use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::cache_store::{CacheStore, CACHE_TTL};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
struct CachedEntry {
    value: String,
    cached_at: Instant,
    ttl: Duration,
}

impl CachedEntry {
    fn is_expired(&self) -> bool {
        self.cached_at.elapsed() >= self.ttl
    }
}

/// Process-local cache. Expired entries are treated as absent and purged when touched.
#[derive(Clone)]
pub struct InMemoryCacheStore {
    entries: Arc<DashMap<String, CachedEntry>>,
    ttl: Duration,
}

impl Default for InMemoryCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self::with_ttl(CACHE_TTL)
    }

    /// Build a store whose entries live for `ttl` instead of [`CACHE_TTL`].
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            ttl,
        }
    }

    /// Number of entries held, expired or not
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn live_value(&self, key: &str) -> Option<String> {
        let value = self
            .entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value.clone());

        if value.is_none() {
            self.entries.remove_if(key, |_, entry| entry.is_expired());
        }
        value
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn exists(&self, key: &str) -> DomainResult<bool> {
        Ok(self.live_value(key).is_some())
    }

    async fn get(&self, key: &str) -> DomainResult<String> {
        self.live_value(key)
            .ok_or_else(|| DomainError::NotFound(format!("Cache key {} not found", key)))
    }

    async fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        self.entries.insert(
            key.to_string(),
            CachedEntry {
                value: value.to_string(),
                cached_at: Instant::now(),
                ttl: self.ttl,
            },
        );
        tracing::debug!(key = %key, "cache set (local)");
        Ok(())
    }

    async fn delete(&self, key: &str) -> DomainResult<()> {
        self.entries.remove(key);
        tracing::debug!(key = %key, "cache invalidated (local)");
        Ok(())
    }
}
