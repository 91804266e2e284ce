use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A course assignment as stored locally. Natural key is `(course_id, id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub course_id: i64,
    pub name: String,
    pub due_date: Option<DateTime<Utc>>,
    pub difficulty: Option<i64>,
    pub length: Option<i64>,
}

impl Assignment {
    pub fn new(
        course_id: i64,
        id: i64,
        name: impl Into<String>,
        due_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            course_id,
            name: name.into(),
            due_date,
            difficulty: None,
            length: None,
        }
    }
}

/// Parse an upstream timestamp. Anything that is not RFC 3339 is treated as "no due date".
pub fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// DTO for updating the local ratings of an assignment
#[derive(Debug, Default, Deserialize)]
pub struct UpdateRatingsRequest {
    pub difficulty: Option<i64>,
    pub length: Option<i64>,
}

/// Per-course line of a sync run
#[derive(Debug, Clone, Serialize)]
pub struct CourseSyncSummary {
    pub course_id: i64,
    pub course_name: String,
    pub assignments: usize,
}

/// Outcome of pulling every current-term assignment into the store
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncReport {
    pub courses: Vec<CourseSyncSummary>,
    pub upserted: usize,
    pub failed: usize,
}
