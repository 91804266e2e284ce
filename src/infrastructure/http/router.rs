use crate::infrastructure::http::controllers::{assignments, health, syllabus};
use crate::infrastructure::http::middleware::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Largest accepted syllabus upload (25 MB)
pub const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    build_router_with_upload_limit(state, MAX_UPLOAD_BYTES)
}

/// Same routes with a custom cap on the `/syllabus` body. Oversized uploads
/// fail while the multipart stream is read and come back as a JSON 413.
pub fn build_router_with_upload_limit(state: AppState, upload_limit: usize) -> Router {
    let uploads = Router::new()
        .route("/syllabus", post(syllabus::upload_syllabus))
        .layer(DefaultBodyLimit::max(upload_limit));

    Router::new()
        .route("/health", get(health::health))
        .route(
            "/:course_id/assignments/:assignment_id",
            get(assignments::get_assignment)
                .delete(assignments::delete_assignment)
                .patch(assignments::update_assignment_ratings),
        )
        .route("/assignments", get(assignments::sync_assignments))
        .route("/all-assignments", get(assignments::list_all_assignments))
        .merge(uploads)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
