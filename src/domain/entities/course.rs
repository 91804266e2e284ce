use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Enrollment term embedded in a course listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub id: i64,
    pub name: String,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
}

/// A course as reported by the course API. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub enrollment_term_id: Option<i64>,
    pub term: Option<Term>,
}

impl Course {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            start_at: None,
            end_at: None,
            enrollment_term_id: None,
            term: None,
        }
    }

    /// Term id from the embedded term, falling back to `enrollment_term_id`.
    pub fn term_id(&self) -> Option<i64> {
        self.term
            .as_ref()
            .map(|t| t.id)
            .or(self.enrollment_term_id)
    }

    pub fn in_term(&self, term_id: i64) -> bool {
        self.term_id() == Some(term_id)
    }
}
