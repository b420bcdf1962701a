//! Course service

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::CourseRepository,
    error::{AppError, AppResult},
    models::{Course, CourseEnrollment},
};

/// Course service for business logic
pub struct CourseService;

impl CourseService {
    /// Create a new course
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        title: &str,
        description: Option<&str>,
        discipline: &str,
        venue: Option<&str>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        capacity: i32,
        created_by: &Uuid,
    ) -> AppResult<Course> {
        if end_date <= start_date {
            return Err(AppError::Validation(
                "Course end date must be after start date".to_string(),
            ));
        }
        if capacity <= 0 {
            return Err(AppError::Validation(
                "Course capacity must be positive".to_string(),
            ));
        }

        CourseRepository::create(
            pool,
            title,
            description,
            discipline,
            venue,
            start_date,
            end_date,
            capacity,
            created_by,
        )
        .await
    }

    /// Get course by ID
    pub async fn get_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Course> {
        CourseRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
    }

    /// List courses with pagination
    pub async fn list(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        discipline: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<(Vec<Course>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        CourseRepository::list(pool, offset, limit, discipline, search).await
    }

    /// Update a course
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        title: Option<&str>,
        description: Option<&str>,
        venue: Option<&str>,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
        capacity: Option<i32>,
    ) -> AppResult<Course> {
        let course = Self::get_by_id(pool, id).await?;

        // Validate the dates that would result from the update
        let new_start = start_date.unwrap_or(course.start_date);
        let new_end = end_date.unwrap_or(course.end_date);
        if new_end <= new_start {
            return Err(AppError::Validation(
                "Course end date must be after start date".to_string(),
            ));
        }
        if let Some(capacity) = capacity {
            if capacity <= 0 {
                return Err(AppError::Validation(
                    "Course capacity must be positive".to_string(),
                ));
            }
        }

        CourseRepository::update(pool, id, title, description, venue, start_date, end_date, capacity)
            .await
    }

    /// Delete a course
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        Self::get_by_id(pool, id).await?;
        CourseRepository::delete(pool, id).await
    }

    /// Enroll a user in a course
    ///
    /// Enrollment closes once the course has started; capacity is enforced;
    /// enrolling twice is a conflict.
    pub async fn enroll(pool: &PgPool, course_id: &Uuid, user_id: &Uuid) -> AppResult<CourseEnrollment> {
        let course = Self::get_by_id(pool, course_id).await?;

        if !course.is_enrollment_open() {
            return Err(AppError::Conflict(
                "Enrollment is closed for this course".to_string(),
            ));
        }

        if CourseRepository::is_enrolled(pool, course_id, user_id).await? {
            return Err(AppError::AlreadyExists(
                "Already enrolled in this course".to_string(),
            ));
        }

        let enrolled = CourseRepository::enrollment_count(pool, course_id).await?;
        if enrolled >= course.capacity as i64 {
            return Err(AppError::Conflict("Course is full".to_string()));
        }

        CourseRepository::enroll(pool, course_id, user_id).await
    }

    /// Withdraw a user from a course
    pub async fn withdraw(pool: &PgPool, course_id: &Uuid, user_id: &Uuid) -> AppResult<()> {
        Self::get_by_id(pool, course_id).await?;

        if !CourseRepository::withdraw(pool, course_id, user_id).await? {
            return Err(AppError::NotFound(
                "Not enrolled in this course".to_string(),
            ));
        }

        Ok(())
    }

    /// List enrollments for a course
    pub async fn enrollments(pool: &PgPool, course_id: &Uuid) -> AppResult<Vec<CourseEnrollment>> {
        Self::get_by_id(pool, course_id).await?;
        CourseRepository::list_enrollments(pool, course_id).await
    }
}
