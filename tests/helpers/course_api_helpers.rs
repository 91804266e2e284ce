use async_trait::async_trait;
use course_relay::domain::ports::course_api::CourseApi;
use course_relay::{parse_timestamp, Assignment, Course, DomainError, DomainResult, Term};
use std::collections::HashMap;
use std::sync::Mutex;

pub const TERM_ID: i64 = 15380;

pub fn current_term_course(id: i64, name: &str) -> Course {
    let mut course = Course::new(id, name);
    course.term = Some(Term {
        id: TERM_ID,
        name: "Fall 2024".to_string(),
        start_at: None,
        end_at: None,
    });
    course
}

pub fn assignment(course_id: i64, id: i64, name: &str, due: Option<&str>) -> Assignment {
    Assignment::new(course_id, id, name, parse_timestamp(due))
}

/// Course API double. A listed course with no registered assignments fails its fetch.
#[derive(Default)]
pub struct FakeCourseApi {
    courses: Mutex<Vec<Course>>,
    assignments: Mutex<HashMap<i64, Vec<Assignment>>>,
    fail_listing: Mutex<bool>,
}

impl FakeCourseApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_course(self, course: Course, assignments: Vec<Assignment>) -> Self {
        self.assignments
            .lock()
            .unwrap()
            .insert(course.id, assignments);
        self.courses.lock().unwrap().push(course);
        self
    }

    /// Course is listed, but fetching its assignments fails.
    pub fn with_failing_course(self, course: Course) -> Self {
        self.courses.lock().unwrap().push(course);
        self
    }

    pub fn failing_listing(self) -> Self {
        *self.fail_listing.lock().unwrap() = true;
        self
    }

    pub fn set_assignments(&self, course_id: i64, assignments: Vec<Assignment>) {
        self.assignments
            .lock()
            .unwrap()
            .insert(course_id, assignments);
    }
}

#[async_trait]
impl CourseApi for FakeCourseApi {
    async fn list_current_term_courses(&self) -> DomainResult<Vec<Course>> {
        if *self.fail_listing.lock().unwrap() {
            return Err(DomainError::Upstream(
                "HTTP 401: Invalid access token".to_string(),
            ));
        }
        Ok(self.courses.lock().unwrap().clone())
    }

    async fn list_assignments(&self, course_id: i64) -> DomainResult<Vec<Assignment>> {
        self.assignments
            .lock()
            .unwrap()
            .get(&course_id)
            .cloned()
            .ok_or_else(|| DomainError::Upstream(format!("HTTP 500 for course {}", course_id)))
    }
}
