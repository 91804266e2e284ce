use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use serde_json::{json, Value};

use crate::{
    domain::entities::{Assignment, SyncReport, UpdateRatingsRequest},
    domain::errors::DomainError,
    infrastructure::http::middleware::{ApiError, ApiResult, AppState},
};

type AssignmentPath = Result<Path<(i64, i64)>, PathRejection>;

fn assignment_error(err: DomainError) -> ApiError {
    match err {
        DomainError::NotFound(_) => ApiError::NotFound("Assignment not found".to_string()),
        other => other.into(),
    }
}

// GET /:course_id/assignments/:assignment_id - Cached single read
pub async fn get_assignment(
    State(state): State<AppState>,
    path: AssignmentPath,
) -> ApiResult<Json<Assignment>> {
    let Path((course_id, assignment_id)) = path?;

    let assignment = state
        .assignment_service
        .read_assignment(course_id, assignment_id)
        .await
        .map_err(assignment_error)?;

    Ok(Json(assignment))
}

// DELETE /:course_id/assignments/:assignment_id
pub async fn delete_assignment(
    State(state): State<AppState>,
    path: AssignmentPath,
) -> ApiResult<Json<Value>> {
    let Path((course_id, assignment_id)) = path?;

    state
        .assignment_service
        .delete_assignment(course_id, assignment_id)
        .await
        .map_err(assignment_error)?;

    Ok(Json(json!({ "message": "Assignment deleted" })))
}

// PATCH /:course_id/assignments/:assignment_id - Update local ratings
pub async fn update_assignment_ratings(
    State(state): State<AppState>,
    path: AssignmentPath,
    body: Result<Json<UpdateRatingsRequest>, JsonRejection>,
) -> ApiResult<Json<Assignment>> {
    let Path((course_id, assignment_id)) = path?;
    let Json(req) = body?;

    let assignment = state
        .assignment_service
        .update_ratings(course_id, assignment_id, req.difficulty, req.length)
        .await
        .map_err(assignment_error)?;

    Ok(Json(assignment))
}

// GET /assignments - Pull from the course API into the store
pub async fn sync_assignments(State(state): State<AppState>) -> ApiResult<Json<SyncReport>> {
    let report = state.assignment_service.sync_assignments().await?;
    Ok(Json(report))
}

// GET /all-assignments - Everything in the store, uncached
pub async fn list_all_assignments(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Assignment>>> {
    let assignments = state.assignment_service.list_assignments().await?;
    Ok(Json(assignments))
}
