use crate::domain::entities::Assignment;
use crate::domain::errors::DomainResult;

/// Repository for locally persisted assignments
#[async_trait::async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Insert the assignment, or overwrite the row with the same `(course_id, id)`
    async fn upsert_assignment(&self, assignment: &Assignment) -> DomainResult<()>;

    /// Fetch one assignment; `NotFound` if absent
    async fn get_assignment(&self, course_id: i64, assignment_id: i64) -> DomainResult<Assignment>;

    async fn list_assignments(&self) -> DomainResult<Vec<Assignment>>;

    /// Delete one assignment; `NotFound` if nothing was deleted
    async fn delete_assignment(&self, course_id: i64, assignment_id: i64) -> DomainResult<()>;

    /// Set the locally tracked ratings and return the updated row
    async fn update_assignment_ratings(
        &self,
        course_id: i64,
        assignment_id: i64,
        difficulty: Option<i64>,
        length: Option<i64>,
    ) -> DomainResult<Assignment>;
}
