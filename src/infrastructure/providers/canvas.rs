//! HTTP client for a Canvas-style course-management API.
//!
//! Only the two list endpoints the relay needs are covered:
//! `GET /api/v1/courses` and `GET /api/v1/courses/:id/assignments`.

use crate::domain::entities::{parse_timestamp, Assignment, Course, Term};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::course_api::CourseApi;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Term the relay syncs when none is configured (Fall 2024).
pub const DEFAULT_TERM_ID: i64 = 15380;

#[derive(Debug, Deserialize)]
struct ApiTerm {
    id: i64,
    #[serde(default)]
    name: Option<String>,
    start_at: Option<String>,
    end_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiCourse {
    id: i64,
    #[serde(default)]
    name: Option<String>,
    start_at: Option<String>,
    end_at: Option<String>,
    enrollment_term_id: Option<i64>,
    term: Option<ApiTerm>,
}

#[derive(Debug, Deserialize)]
struct ApiAssignment {
    id: i64,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    course_id: Option<i64>,
    due_at: Option<String>,
}

impl From<ApiCourse> for Course {
    fn from(c: ApiCourse) -> Self {
        Course {
            id: c.id,
            name: c.name.unwrap_or_default(),
            start_at: parse_timestamp(c.start_at.as_deref()),
            end_at: parse_timestamp(c.end_at.as_deref()),
            enrollment_term_id: c.enrollment_term_id,
            term: c.term.map(|t| Term {
                id: t.id,
                name: t.name.unwrap_or_default(),
                start_at: parse_timestamp(t.start_at.as_deref()),
                end_at: parse_timestamp(t.end_at.as_deref()),
            }),
        }
    }
}

impl ApiAssignment {
    /// `course_id` is the course the listing was requested for; it wins over
    /// whatever the record carries.
    fn into_assignment(self, course_id: i64) -> Assignment {
        Assignment::new(
            course_id,
            self.id,
            self.name.unwrap_or_default(),
            parse_timestamp(self.due_at.as_deref()),
        )
    }
}

#[derive(Clone)]
pub struct CanvasClient {
    base_url: String,
    auth_token: String,
    term_id: i64,
    http_client: Client,
}

impl CanvasClient {
    pub fn new(base_url: &str, auth_token: &str, term_id: i64) -> DomainResult<Self> {
        let http_client = Client::builder()
            .build()
            .map_err(|e| DomainError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token: auth_token.to_string(),
            term_id,
            http_client,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> DomainResult<T> {
        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(url)
            .bearer_auth(&self.auth_token)
            .send()
            .await
            .map_err(|e| DomainError::Upstream(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body: String = response
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(500)
                .collect();
            return Err(DomainError::Upstream(format!(
                "GET {} returned HTTP {}: {}",
                url,
                status.as_u16(),
                body
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| DomainError::Upstream(format!("Invalid response from {}: {}", url, e)))
    }
}

#[async_trait]
impl CourseApi for CanvasClient {
    async fn list_current_term_courses(&self) -> DomainResult<Vec<Course>> {
        // per_page=100 so a single page covers a student's whole course list
        let url = format!(
            "{}/api/v1/courses?published=true&per_page=100&include[]=term",
            self.base_url
        );
        let courses: Vec<ApiCourse> = self.get_json(&url).await?;

        Ok(courses
            .into_iter()
            .map(Course::from)
            .filter(|course| course.in_term(self.term_id))
            .collect())
    }

    async fn list_assignments(&self, course_id: i64) -> DomainResult<Vec<Assignment>> {
        let url = format!("{}/api/v1/courses/{}/assignments", self.base_url, course_id);
        let assignments: Vec<ApiAssignment> = self.get_json(&url).await?;

        Ok(assignments
            .into_iter()
            .map(|a| a.into_assignment(course_id))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_assignment_maps_invalid_due_date_to_none() {
        let raw = r#"{"id": 55, "name": "HW1", "course_id": 101, "due_at": "soon", "description": "x"}"#;
        let api: ApiAssignment = serde_json::from_str(raw).unwrap();
        let assignment = api.into_assignment(101);

        assert_eq!(assignment.id, 55);
        assert_eq!(assignment.course_id, 101);
        assert_eq!(assignment.due_date, None);
    }

    #[test]
    fn test_api_course_with_null_term() {
        let raw = r#"{"id": 7, "name": "Sandbox", "start_at": null, "end_at": null, "enrollment_term_id": 1, "term": null}"#;
        let api: ApiCourse = serde_json::from_str(raw).unwrap();
        let course = Course::from(api);

        assert_eq!(course.term, None);
        assert!(course.in_term(1));
        assert!(!course.in_term(DEFAULT_TERM_ID));
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let client = CanvasClient::new("https://canvas.example.edu/", "token", DEFAULT_TERM_ID).unwrap();
        assert_eq!(client.base_url, "https://canvas.example.edu");
        assert_eq!(client.term_id, DEFAULT_TERM_ID);
    }

    #[test]
    fn test_api_assignment_without_course_id_or_name() {
        let raw = r#"{"id": 57, "name": null, "due_at": null}"#;
        let api: ApiAssignment = serde_json::from_str(raw).unwrap();
        let assignment = api.into_assignment(101);

        assert_eq!(assignment.course_id, 101);
        assert_eq!(assignment.name, "");
        assert_eq!(assignment.due_date, None);
    }
}
