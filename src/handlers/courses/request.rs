//! Course request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_COURSE_DESCRIPTION_LENGTH, MAX_COURSE_TITLE_LENGTH};

/// Create course request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = MAX_COURSE_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(max = MAX_COURSE_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 64))]
    pub discipline: String,

    #[validate(length(max = 128))]
    pub venue: Option<String>,

    pub start_date: DateTime<Utc>,

    pub end_date: DateTime<Utc>,

    /// Maximum number of enrolled participants
    pub capacity: i32,
}

/// Update course request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, max = MAX_COURSE_TITLE_LENGTH))]
    pub title: Option<String>,

    #[validate(length(max = MAX_COURSE_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    #[validate(length(max = 128))]
    pub venue: Option<String>,

    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub capacity: Option<i32>,
}

/// List courses query parameters
#[derive(Debug, Deserialize)]
pub struct ListCoursesQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub discipline: Option<String>,
    pub search: Option<String>,
}
