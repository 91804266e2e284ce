use crate::domain::entities::{Assignment, Course};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Assignments of the current term, grouped by course id and then course name.
pub type TermAssignments = BTreeMap<i64, BTreeMap<String, Vec<Assignment>>>;

/// Read-only access to the external course-management service
#[async_trait]
pub trait CourseApi: Send + Sync {
    /// Published courses that belong to the configured current term
    async fn list_current_term_courses(&self) -> DomainResult<Vec<Course>>;

    /// Every assignment of one course
    async fn list_assignments(&self, course_id: i64) -> DomainResult<Vec<Assignment>>;

    /// Assignments for every current-term course.
    ///
    /// A course whose assignment fetch fails is logged and left out; only a
    /// failure to list the courses fails the whole call.
    async fn list_all_current_term_assignments(&self) -> DomainResult<TermAssignments> {
        let courses = self.list_current_term_courses().await?;
        let mut all = TermAssignments::new();

        for course in courses {
            match self.list_assignments(course.id).await {
                Ok(assignments) => {
                    all.entry(course.id)
                        .or_default()
                        .insert(course.name, assignments);
                }
                Err(e) => {
                    tracing::warn!(
                        "Error fetching assignments for course {}: {}",
                        course.id,
                        e
                    );
                }
            }
        }

        Ok(all)
    }
}
