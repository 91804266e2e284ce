use crate::domain::entities::{Assignment, CourseSyncSummary, SyncReport};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::assignment_repository::AssignmentRepository;
use crate::domain::ports::cache_store::{assignment_cache_key, CacheStore};
use crate::domain::ports::course_api::CourseApi;
use std::sync::Arc;

/// Moves assignments from the course API into the store and serves reads
/// through the cache.
///
/// Store operations are strict: their errors are returned. Cache operations
/// are best-effort: their errors are logged and the call carries on against
/// the store.
#[derive(Clone)]
pub struct AssignmentService {
    course_api: Arc<dyn CourseApi>,
    assignment_repo: Arc<dyn AssignmentRepository>,
    cache: Arc<dyn CacheStore>,
}

impl AssignmentService {
    pub fn new(
        course_api: Arc<dyn CourseApi>,
        assignment_repo: Arc<dyn AssignmentRepository>,
        cache: Arc<dyn CacheStore>,
    ) -> Self {
        Self {
            course_api,
            assignment_repo,
            cache,
        }
    }

    /// Pull every current-term assignment and upsert it.
    ///
    /// Courses whose assignments could not be fetched are already dropped by
    /// the course API; a record that fails to persist is logged and counted
    /// in `failed`.
    pub async fn sync_assignments(&self) -> DomainResult<SyncReport> {
        let all = self.course_api.list_all_current_term_assignments().await?;
        let mut report = SyncReport::default();

        for (course_id, by_name) in all {
            for (course_name, assignments) in by_name {
                tracing::info!(
                    "Course: {} (ID: {}), {} assignments",
                    course_name,
                    course_id,
                    assignments.len()
                );
                report.courses.push(CourseSyncSummary {
                    course_id,
                    course_name,
                    assignments: assignments.len(),
                });

                for mut assignment in assignments {
                    assignment.course_id = course_id;
                    match self.assignment_repo.upsert_assignment(&assignment).await {
                        Ok(()) => {
                            report.upserted += 1;
                            self.evict(course_id, assignment.id).await;
                        }
                        Err(e) => {
                            report.failed += 1;
                            tracing::warn!(
                                "Error upserting assignment {} of course {}: {}",
                                assignment.id,
                                course_id,
                                e
                            );
                        }
                    }
                }
            }
        }

        tracing::info!(
            "Sync finished: {} courses, {} upserted, {} failed",
            report.courses.len(),
            report.upserted,
            report.failed
        );
        Ok(report)
    }

    /// Cache-aside read of a single assignment.
    pub async fn read_assignment(
        &self,
        course_id: i64,
        assignment_id: i64,
    ) -> DomainResult<Assignment> {
        let key = assignment_cache_key(course_id, assignment_id);

        match self.cache.exists(&key).await {
            Ok(true) => {
                if let Some(assignment) = self.read_cached(&key).await {
                    tracing::debug!(key = %key, "cache hit");
                    return Ok(assignment);
                }
            }
            Ok(false) => tracing::debug!(key = %key, "cache miss"),
            Err(e) => tracing::warn!(key = %key, error = %e, "cache check failed"),
        }

        let assignment = self
            .assignment_repo
            .get_assignment(course_id, assignment_id)
            .await?;

        match serde_json::to_string(&assignment) {
            Ok(value) => {
                if let Err(e) = self.cache.set(&key, &value).await {
                    tracing::warn!(key = %key, error = %e, "Error caching assignment");
                }
            }
            Err(e) => tracing::warn!(key = %key, error = %e, "Error serializing assignment"),
        }

        Ok(assignment)
    }

    pub async fn list_assignments(&self) -> DomainResult<Vec<Assignment>> {
        self.assignment_repo.list_assignments().await
    }

    /// Delete from the store, then drop any cached copy.
    pub async fn delete_assignment(&self, course_id: i64, assignment_id: i64) -> DomainResult<()> {
        self.assignment_repo
            .delete_assignment(course_id, assignment_id)
            .await?;
        self.evict(course_id, assignment_id).await;
        Ok(())
    }

    /// Set local ratings; fields left as `None` keep their stored value.
    pub async fn update_ratings(
        &self,
        course_id: i64,
        assignment_id: i64,
        difficulty: Option<i64>,
        length: Option<i64>,
    ) -> DomainResult<Assignment> {
        for (field, value) in [("difficulty", difficulty), ("length", length)] {
            if matches!(value, Some(v) if v < 0) {
                return Err(DomainError::ValidationError(format!(
                    "{} must not be negative",
                    field
                )));
            }
        }

        let assignment = self
            .assignment_repo
            .update_assignment_ratings(course_id, assignment_id, difficulty, length)
            .await?;
        self.evict(course_id, assignment_id).await;
        Ok(assignment)
    }

    /// Read and decode a cached entry. `None` sends the caller to the store;
    /// an undecodable value is evicted so it cannot be served again.
    async fn read_cached(&self, key: &str) -> Option<Assignment> {
        let raw = match self.cache.get(key).await {
            Ok(raw) => raw,
            Err(DomainError::NotFound(_)) => return None,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Error reading cached assignment");
                return None;
            }
        };

        match serde_json::from_str::<Assignment>(&raw) {
            Ok(assignment) => Some(assignment),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Discarding corrupt cached assignment");
                if let Err(e) = self.cache.delete(key).await {
                    tracing::warn!(key = %key, error = %e, "Error deleting corrupt cache entry");
                }
                None
            }
        }
    }

    async fn evict(&self, course_id: i64, assignment_id: i64) {
        let key = assignment_cache_key(course_id, assignment_id);
        if let Err(e) = self.cache.delete(&key).await {
            tracing::warn!(key = %key, error = %e, "Error deleting key from cache");
        }
    }
}
