//! Course repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{Course, CourseEnrollment};

/// Repository for course and enrollment database operations
pub struct CourseRepository;

impl CourseRepository {
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
        let course = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses
                (title, description, discipline, venue, start_date, end_date, capacity, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(discipline)
        .bind(venue)
        .bind(start_date)
        .bind(end_date)
        .bind(capacity)
        .bind(created_by)
        .fetch_one(pool)
        .await?;

        Ok(course)
    }

    /// Find course by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Course>> {
        let course = sqlx::query_as::<_, Course>(r#"SELECT * FROM courses WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(course)
    }

    /// Update course fields
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
        let course = sqlx::query_as::<_, Course>(
            r#"
            UPDATE courses
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                venue = COALESCE($4, venue),
                start_date = COALESCE($5, start_date),
                end_date = COALESCE($6, end_date),
                capacity = COALESCE($7, capacity),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(venue)
        .bind(start_date)
        .bind(end_date)
        .bind(capacity)
        .fetch_one(pool)
        .await?;

        Ok(course)
    }

    /// Delete a course (enrollments cascade)
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM courses WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// List courses with pagination and optional discipline filter
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        discipline: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<(Vec<Course>, i64)> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let courses = sqlx::query_as::<_, Course>(
            r#"
            SELECT * FROM courses
            WHERE
                ($1::text IS NULL OR discipline = $1)
                AND ($2::text IS NULL OR title ILIKE $2)
            ORDER BY start_date DESC
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(discipline)
        .bind(&search_pattern)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM courses
            WHERE
                ($1::text IS NULL OR discipline = $1)
                AND ($2::text IS NULL OR title ILIKE $2)
            "#,
        )
        .bind(discipline)
        .bind(&search_pattern)
        .fetch_one(pool)
        .await?;

        Ok((courses, count))
    }

    /// Enroll a user in a course
    pub async fn enroll(pool: &PgPool, course_id: &Uuid, user_id: &Uuid) -> AppResult<CourseEnrollment> {
        let enrollment = sqlx::query_as::<_, CourseEnrollment>(
            r#"
            INSERT INTO course_enrollments (course_id, user_id)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(course_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(enrollment)
    }

    /// Withdraw a user from a course; returns whether a row was removed
    pub async fn withdraw(pool: &PgPool, course_id: &Uuid, user_id: &Uuid) -> AppResult<bool> {
        let result =
            sqlx::query(r#"DELETE FROM course_enrollments WHERE course_id = $1 AND user_id = $2"#)
                .bind(course_id)
                .bind(user_id)
                .execute(pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Check whether a user is enrolled
    pub async fn is_enrolled(pool: &PgPool, course_id: &Uuid, user_id: &Uuid) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM course_enrollments WHERE course_id = $1 AND user_id = $2"#,
        )
        .bind(course_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(count > 0)
    }

    /// Count current enrollments for a course
    pub async fn enrollment_count(pool: &PgPool, course_id: &Uuid) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM course_enrollments WHERE course_id = $1"#)
                .bind(course_id)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }

    /// List enrollments for a course
    pub async fn list_enrollments(pool: &PgPool, course_id: &Uuid) -> AppResult<Vec<CourseEnrollment>> {
        let enrollments = sqlx::query_as::<_, CourseEnrollment>(
            r#"SELECT * FROM course_enrollments WHERE course_id = $1 ORDER BY enrolled_at"#,
        )
        .bind(course_id)
        .fetch_all(pool)
        .await?;

        Ok(enrollments)
    }

    /// Count total courses
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM courses"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
