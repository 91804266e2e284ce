use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::file_storage::FileStorage;
use std::path::Path;
use std::sync::Arc;

/// Stores uploaded syllabus files under the uploads directory.
#[derive(Clone)]
pub struct SyllabusService {
    storage: Arc<dyn FileStorage>,
}

impl SyllabusService {
    pub fn new(storage: Arc<dyn FileStorage>) -> Self {
        Self { storage }
    }

    /// Save the upload under its own file name and return that name.
    ///
    /// Any directory part of the client-supplied name is dropped.
    pub async fn save_syllabus(&self, filename: &str, content: &[u8]) -> DomainResult<String> {
        let name = Path::new(filename)
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| {
                DomainError::ValidationError(format!("Invalid file name: {:?}", filename))
            })?;

        self.storage.save(&name, content).await?;
        tracing::info!("Syllabus saved: {} ({} bytes)", name, content.len());
        Ok(name)
    }
}
