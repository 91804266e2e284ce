use crate::domain::entities::{parse_timestamp, Assignment};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::assignment_repository::AssignmentRepository;
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::any::AnyRow;
use sqlx::{Any, Decode, Row, Type, TypeInfo, ValueRef};

/// Decode a nullable column.
///
/// The Any driver reports a SQL NULL through its type info and refuses to
/// decode it as `Option<T>`, so NULL is checked on the raw value first.
fn nullable<T>(row: &AnyRow, column: &str) -> DomainResult<Option<T>>
where
    T: for<'r> Decode<'r, Any> + Type<Any>,
{
    let raw = row.try_get_raw(column)?;
    if raw.is_null() || raw.type_info().is_null() {
        return Ok(None);
    }
    Ok(Some(row.try_get::<T, _>(column)?))
}

fn assignment_from_row(row: &AnyRow) -> DomainResult<Assignment> {
    let due_date: Option<String> = nullable(row, "due_date")?;
    Ok(Assignment {
        id: row.try_get("id")?,
        course_id: row.try_get("course_id")?,
        name: row.try_get("name")?,
        due_date: parse_timestamp(due_date.as_deref()),
        difficulty: nullable(row, "difficulty")?,
        length: nullable(row, "length")?,
    })
}

fn not_found(course_id: i64, assignment_id: i64) -> DomainError {
    DomainError::NotFound(format!(
        "Assignment {} in course {} not found",
        assignment_id, course_id
    ))
}

#[async_trait]
impl AssignmentRepository for Database {
    async fn upsert_assignment(&self, assignment: &Assignment) -> DomainResult<()> {
        // Ratings are local data; a null coming from upstream must not wipe them.
        sqlx::query(
            "INSERT INTO assignments (id, course_id, name, due_date, difficulty, length)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT(course_id, id) DO UPDATE SET
                 name = excluded.name,
                 due_date = excluded.due_date,
                 difficulty = COALESCE(excluded.difficulty, assignments.difficulty),
                 length = COALESCE(excluded.length, assignments.length)",
        )
        .bind(assignment.id)
        .bind(assignment.course_id)
        .bind(&assignment.name)
        .bind(assignment.due_date.map(|d| d.to_rfc3339()))
        .bind(assignment.difficulty)
        .bind(assignment.length)
        .execute(&self.pool)
        .await?;

        tracing::debug!(
            "Assignment upserted: course_id={}, id={}",
            assignment.course_id,
            assignment.id
        );
        Ok(())
    }

    async fn get_assignment(&self, course_id: i64, assignment_id: i64) -> DomainResult<Assignment> {
        let row = sqlx::query(
            "SELECT id, course_id, name, due_date, difficulty, length
             FROM assignments
             WHERE course_id = ? AND id = ?",
        )
        .bind(course_id)
        .bind(assignment_id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => assignment_from_row(&row),
            None => Err(not_found(course_id, assignment_id)),
        }
    }

    async fn list_assignments(&self) -> DomainResult<Vec<Assignment>> {
        let rows = sqlx::query(
            "SELECT id, course_id, name, due_date, difficulty, length
             FROM assignments
             ORDER BY course_id, id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(assignment_from_row).collect()
    }

    async fn delete_assignment(&self, course_id: i64, assignment_id: i64) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM assignments WHERE course_id = ? AND id = ?")
            .bind(course_id)
            .bind(assignment_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(course_id, assignment_id));
        }

        tracing::info!(
            "Assignment deleted: course_id={}, id={}",
            course_id,
            assignment_id
        );
        Ok(())
    }

    async fn update_assignment_ratings(
        &self,
        course_id: i64,
        assignment_id: i64,
        difficulty: Option<i64>,
        length: Option<i64>,
    ) -> DomainResult<Assignment> {
        let result = sqlx::query(
            "UPDATE assignments
             SET difficulty = COALESCE(?, difficulty),
                 length = COALESCE(?, length)
             WHERE course_id = ? AND id = ?",
        )
        .bind(difficulty)
        .bind(length)
        .bind(course_id)
        .bind(assignment_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(course_id, assignment_id));
        }

        self.get_assignment(course_id, assignment_id).await
    }
}
