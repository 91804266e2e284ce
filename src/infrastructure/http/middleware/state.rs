use crate::application::services::{AssignmentService, SyllabusService};

/// Shared handler state. Cheap to clone; every service holds `Arc`ed ports.
#[derive(Clone)]
pub struct AppState {
    pub assignment_service: AssignmentService,
    pub syllabus_service: SyllabusService,
}
