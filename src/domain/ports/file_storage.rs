use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Save a file to the storage, replacing any existing one
    async fn save(&self, path: &str, content: &[u8]) -> DomainResult<()>;
}
