use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::time::Duration;

/// Lifetime of every cache entry, counted from the write.
pub const CACHE_TTL: Duration = Duration::from_secs(2 * 60);

/// Key under which a single assignment lookup is cached.
pub fn assignment_cache_key(course_id: i64, assignment_id: i64) -> String {
    format!("({}, {})", course_id, assignment_id)
}

#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Check whether a live entry exists for the key
    async fn exists(&self, key: &str) -> DomainResult<bool>;

    /// Read a value; `NotFound` when absent or expired
    async fn get(&self, key: &str) -> DomainResult<String>;

    /// Write a value with the fixed [`CACHE_TTL`], replacing any previous one
    async fn set(&self, key: &str, value: &str) -> DomainResult<()>;

    /// Remove a key. Removing a missing key succeeds.
    async fn delete(&self, key: &str) -> DomainResult<()>;
}
