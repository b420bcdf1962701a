//! Athlete repository

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::Athlete;

/// Repository for athlete database operations
pub struct AthleteRepository;

impl AthleteRepository {
    /// Create a new athlete profile
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        user_id: &Uuid,
        association_id: &Uuid,
        birth_date: NaiveDate,
        gender: &str,
        discipline: &str,
        category: &str,
        license_number: &str,
    ) -> AppResult<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            INSERT INTO athletes
                (user_id, association_id, birth_date, gender, discipline, category, license_number)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(association_id)
        .bind(birth_date)
        .bind(gender)
        .bind(discipline)
        .bind(category)
        .bind(license_number)
        .fetch_one(pool)
        .await?;

        Ok(athlete)
    }

    /// Find athlete by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Athlete>> {
        let athlete = sqlx::query_as::<_, Athlete>(r#"SELECT * FROM athletes WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(athlete)
    }

    /// Find athlete profile by user account
    pub async fn find_by_user_id(pool: &PgPool, user_id: &Uuid) -> AppResult<Option<Athlete>> {
        let athlete = sqlx::query_as::<_, Athlete>(r#"SELECT * FROM athletes WHERE user_id = $1"#)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

        Ok(athlete)
    }

    /// Find athlete by license number
    pub async fn find_by_license(pool: &PgPool, license_number: &str) -> AppResult<Option<Athlete>> {
        let athlete =
            sqlx::query_as::<_, Athlete>(r#"SELECT * FROM athletes WHERE license_number = $1"#)
                .bind(license_number)
                .fetch_optional(pool)
                .await?;

        Ok(athlete)
    }

    /// Update athlete fields
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        association_id: Option<&Uuid>,
        discipline: Option<&str>,
        category: Option<&str>,
    ) -> AppResult<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            UPDATE athletes
            SET
                association_id = COALESCE($2, association_id),
                discipline = COALESCE($3, discipline),
                category = COALESCE($4, category),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(association_id)
        .bind(discipline)
        .bind(category)
        .fetch_one(pool)
        .await?;

        Ok(athlete)
    }

    /// Delete an athlete profile
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM athletes WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// List athletes with pagination and filters
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        association_id: Option<&Uuid>,
        discipline: Option<&str>,
        category: Option<&str>,
    ) -> AppResult<(Vec<Athlete>, i64)> {
        let athletes = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT * FROM athletes
            WHERE
                ($1::uuid IS NULL OR association_id = $1)
                AND ($2::text IS NULL OR discipline = $2)
                AND ($3::text IS NULL OR category = $3)
            ORDER BY created_at DESC
            OFFSET $4 LIMIT $5
            "#,
        )
        .bind(association_id)
        .bind(discipline)
        .bind(category)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM athletes
            WHERE
                ($1::uuid IS NULL OR association_id = $1)
                AND ($2::text IS NULL OR discipline = $2)
                AND ($3::text IS NULL OR category = $3)
            "#,
        )
        .bind(association_id)
        .bind(discipline)
        .bind(category)
        .fetch_one(pool)
        .await?;

        Ok((athletes, count))
    }

    /// Count total athletes
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM athletes"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
