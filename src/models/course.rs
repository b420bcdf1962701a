//! Course model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Training course offered by the federation
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub discipline: String,
    pub venue: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Maximum number of enrolled participants
    pub capacity: i32,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Get current status of the course
    pub fn status(&self) -> CourseStatus {
        self.status_at(Utc::now())
    }

    /// Status at a given instant
    pub fn status_at(&self, now: DateTime<Utc>) -> CourseStatus {
        if now < self.start_date {
            CourseStatus::Upcoming
        } else if now < self.end_date {
            CourseStatus::Ongoing
        } else {
            CourseStatus::Finished
        }
    }

    /// Enrollment closes once the course has started
    pub fn is_enrollment_open(&self) -> bool {
        Utc::now() < self.start_date
    }
}

/// Derived course status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    Upcoming,
    Ongoing,
    Finished,
}

/// A user's enrollment in a course
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CourseEnrollment {
    pub id: Uuid,
    pub course_id: Uuid,
    pub user_id: Uuid,
    pub enrolled_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn course(start_offset_hours: i64, end_offset_hours: i64) -> Course {
        let now = Utc::now();
        Course {
            id: Uuid::new_v4(),
            title: "Sprint mechanics".to_string(),
            description: None,
            discipline: "athletics".to_string(),
            venue: None,
            start_date: now + Duration::hours(start_offset_hours),
            end_date: now + Duration::hours(end_offset_hours),
            capacity: 30,
            created_by: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_status_derivation() {
        assert_eq!(course(1, 2).status(), CourseStatus::Upcoming);
        assert_eq!(course(-1, 1).status(), CourseStatus::Ongoing);
        assert_eq!(course(-2, -1).status(), CourseStatus::Finished);
    }

    #[test]
    fn test_enrollment_window() {
        assert!(course(1, 2).is_enrollment_open());
        assert!(!course(-1, 1).is_enrollment_open());
        assert!(!course(-2, -1).is_enrollment_open());
    }
}
