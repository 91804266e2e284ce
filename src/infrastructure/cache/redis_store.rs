use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::cache_store::{CacheStore, CACHE_TTL};
use async_trait::async_trait;
use deadpool_redis::{Config as PoolConfig, Pool, Runtime};
use redis::AsyncCommands;
use std::time::Duration;

/// Upper bound on the startup connectivity check.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Redis-backed cache. Expiry is delegated to Redis via `SET .. EX`.
#[derive(Clone)]
pub struct RedisCacheStore {
    pool: Pool,
}

impl RedisCacheStore {
    /// Build the pool and `PING` the server.
    ///
    /// Fails if the server does not answer within five seconds; callers treat
    /// that as fatal at startup.
    pub async fn connect(url: &str) -> DomainResult<Self> {
        tracing::info!(url = %url, "Connecting to Redis");

        let pool = PoolConfig::from_url(url)
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| DomainError::Cache(format!("Failed to create Redis pool: {}", e)))?;

        let store = Self { pool };
        match tokio::time::timeout(CONNECT_TIMEOUT, store.ping()).await {
            Ok(Ok(())) => {
                tracing::info!("Connected to Redis");
                Ok(store)
            }
            Ok(Err(e)) => Err(e),
            Err(_) => Err(DomainError::Cache(format!(
                "Timed out after {}s connecting to Redis at {}",
                CONNECT_TIMEOUT.as_secs(),
                url
            ))),
        }
    }

    async fn ping(&self) -> DomainResult<()> {
        let mut conn = self.connection().await?;
        let _pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| DomainError::Cache(format!("Redis PING failed: {}", e)))?;
        Ok(())
    }

    async fn connection(&self) -> DomainResult<deadpool_redis::Connection> {
        self.pool
            .get()
            .await
            .map_err(|e| DomainError::Cache(format!("Failed to get Redis connection: {}", e)))
    }
}

fn redis_error(op: &str, key: &str, err: redis::RedisError) -> DomainError {
    DomainError::Cache(format!("Redis {} {} failed: {}", op, key, err))
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn exists(&self, key: &str) -> DomainResult<bool> {
        let mut conn = self.connection().await?;
        conn.exists::<_, bool>(key)
            .await
            .map_err(|e| redis_error("EXISTS", key, e))
    }

    async fn get(&self, key: &str) -> DomainResult<String> {
        let mut conn = self.connection().await?;
        let value = conn
            .get::<_, Option<String>>(key)
            .await
            .map_err(|e| redis_error("GET", key, e))?;

        value.ok_or_else(|| DomainError::NotFound(format!("Cache key {} not found", key)))
    }

    async fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        let mut conn = self.connection().await?;
        conn.set_ex::<_, _, ()>(key, value, CACHE_TTL.as_secs())
            .await
            .map_err(|e| redis_error("SET", key, e))?;

        tracing::debug!(key = %key, ttl_secs = %CACHE_TTL.as_secs(), "cache set (redis)");
        Ok(())
    }

    async fn delete(&self, key: &str) -> DomainResult<()> {
        let mut conn = self.connection().await?;
        conn.del::<_, ()>(key)
            .await
            .map_err(|e| redis_error("DEL", key, e))?;

        tracing::debug!(key = %key, "cache invalidated (redis)");
        Ok(())
    }
}
