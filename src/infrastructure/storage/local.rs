use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::file_storage::FileStorage;
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

#[derive(Clone)]
pub struct LocalFileStorage {
    base_path: PathBuf,
}

impl LocalFileStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve `path` under the base directory. Only plain relative components are accepted.
    fn resolve_path(&self, path: &str) -> DomainResult<PathBuf> {
        let relative = Path::new(path);
        let is_plain = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));

        if path.is_empty() || !is_plain {
            return Err(DomainError::ValidationError(format!(
                "Invalid storage path: {}",
                path
            )));
        }

        Ok(self.base_path.join(relative))
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn save(&self, path: &str, content: &[u8]) -> DomainResult<()> {
        let file_path = self.resolve_path(path)?;

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::Io(format!("Failed to create directory: {}", e)))?;
        }

        fs::write(&file_path, content)
            .await
            .map_err(|e| DomainError::Io(format!("Failed to write file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_storage() -> LocalFileStorage {
        let dir = std::env::temp_dir().join(format!(
            "course-relay-storage-{}-{}",
            std::process::id(),
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        LocalFileStorage::new(dir)
    }

    #[tokio::test]
    async fn test_save_creates_base_dir_and_overwrites() {
        let storage = temp_storage();

        storage.save("syllabus.pdf", b"%PDF-1.4").await.unwrap();
        storage.save("syllabus.pdf", b"%PDF-1.7").await.unwrap();

        let saved = fs::read(storage.base_path().join("syllabus.pdf")).await.unwrap();
        assert_eq!(saved, b"%PDF-1.7");

        let _ = std::fs::remove_dir_all(storage.base_path());
    }

    #[tokio::test]
    async fn test_rejects_traversal_and_absolute_paths() {
        let storage = temp_storage();

        assert!(matches!(
            storage.save("../escape.txt", b"x").await,
            Err(DomainError::ValidationError(_))
        ));
        assert!(matches!(
            storage.save("/etc/passwd", b"x").await,
            Err(DomainError::ValidationError(_))
        ));
        assert!(matches!(
            storage.save("", b"x").await,
            Err(DomainError::ValidationError(_))
        ));
    }
}
