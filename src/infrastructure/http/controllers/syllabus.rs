use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde_json::{json, Value};

use crate::{
    domain::errors::DomainError,
    infrastructure::http::middleware::{ApiError, ApiResult, AppState},
};

/// Multipart field carrying the upload
const FILE_FIELD: &str = "file";

fn no_file() -> ApiError {
    ApiError::BadRequest("No file uploaded".to_string())
}

// POST /syllabus - multipart upload, field `file`
pub async fn upload_syllabus(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<Value>> {
    let mut multipart = multipart.map_err(|_| no_file())?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().map(str::to_string).ok_or_else(no_file)?;
        let content = field.bytes().await?;

        let saved = state
            .syllabus_service
            .save_syllabus(&filename, &content)
            .await
            .map_err(|e| match e {
                DomainError::ValidationError(msg) => ApiError::BadRequest(msg),
                other => {
                    tracing::error!("Error saving syllabus {}: {}", filename, other);
                    ApiError::Internal("Failed to save file".to_string())
                }
            })?;

        return Ok(Json(json!({
            "filename": saved,
            "message": "File uploaded successfully"
        })));
    }

    Err(no_file())
}
