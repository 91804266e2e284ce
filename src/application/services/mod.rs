pub mod assignment_service;
pub mod syllabus_service;

pub use assignment_service::AssignmentService;
pub use syllabus_service::SyllabusService;
