pub mod assignment_repository;
pub mod cache_store;
pub mod course_api;
pub mod file_storage;
