//! Coach repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::Coach;

/// Repository for coach database operations
pub struct CoachRepository;

impl CoachRepository {
    /// Create a new coach profile
    pub async fn create(
        pool: &PgPool,
        user_id: &Uuid,
        association_id: &Uuid,
        specialty: &str,
        certification_level: &str,
    ) -> AppResult<Coach> {
        let coach = sqlx::query_as::<_, Coach>(
            r#"
            INSERT INTO coaches (user_id, association_id, specialty, certification_level)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(association_id)
        .bind(specialty)
        .bind(certification_level)
        .fetch_one(pool)
        .await?;

        Ok(coach)
    }

    /// Find coach by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Coach>> {
        let coach = sqlx::query_as::<_, Coach>(r#"SELECT * FROM coaches WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(coach)
    }

    /// Find coach profile by user account
    pub async fn find_by_user_id(pool: &PgPool, user_id: &Uuid) -> AppResult<Option<Coach>> {
        let coach = sqlx::query_as::<_, Coach>(r#"SELECT * FROM coaches WHERE user_id = $1"#)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

        Ok(coach)
    }

    /// Update coach fields
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        association_id: Option<&Uuid>,
        specialty: Option<&str>,
        certification_level: Option<&str>,
    ) -> AppResult<Coach> {
        let coach = sqlx::query_as::<_, Coach>(
            r#"
            UPDATE coaches
            SET
                association_id = COALESCE($2, association_id),
                specialty = COALESCE($3, specialty),
                certification_level = COALESCE($4, certification_level),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(association_id)
        .bind(specialty)
        .bind(certification_level)
        .fetch_one(pool)
        .await?;

        Ok(coach)
    }

    /// Delete a coach profile
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM coaches WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// List coaches with pagination and optional association filter
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        association_id: Option<&Uuid>,
    ) -> AppResult<(Vec<Coach>, i64)> {
        let coaches = sqlx::query_as::<_, Coach>(
            r#"
            SELECT * FROM coaches
            WHERE ($1::uuid IS NULL OR association_id = $1)
            ORDER BY created_at DESC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(association_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM coaches WHERE ($1::uuid IS NULL OR association_id = $1)"#,
        )
        .bind(association_id)
        .fetch_one(pool)
        .await?;

        Ok((coaches, count))
    }

    /// Count total coaches
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM coaches"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
