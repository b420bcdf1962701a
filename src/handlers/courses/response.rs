//! Course response DTOs

use serde::Serialize;

use crate::models::{Course, CourseEnrollment, CourseStatus};

/// Course with its derived status
#[derive(Debug, Serialize)]
pub struct CourseResponse {
    #[serde(flatten)]
    pub course: Course,
    pub status: CourseStatus,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        let status = course.status();
        Self { course, status }
    }
}

/// Course list response
#[derive(Debug, Serialize)]
pub struct CoursesListResponse {
    pub courses: Vec<CourseResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Enrollment list response
#[derive(Debug, Serialize)]
pub struct EnrollmentsResponse {
    pub enrollments: Vec<CourseEnrollment>,
    pub total: usize,
}
