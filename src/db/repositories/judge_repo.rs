//! Judge repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::Judge;

/// Repository for judge database operations
pub struct JudgeRepository;

impl JudgeRepository {
    /// Create a new judge profile
    pub async fn create(
        pool: &PgPool,
        user_id: &Uuid,
        association_id: &Uuid,
        discipline: &str,
        certification_level: &str,
    ) -> AppResult<Judge> {
        let judge = sqlx::query_as::<_, Judge>(
            r#"
            INSERT INTO judges (user_id, association_id, discipline, certification_level)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(association_id)
        .bind(discipline)
        .bind(certification_level)
        .fetch_one(pool)
        .await?;

        Ok(judge)
    }

    /// Find judge by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Judge>> {
        let judge = sqlx::query_as::<_, Judge>(r#"SELECT * FROM judges WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(judge)
    }

    /// Find judge profile by user account
    pub async fn find_by_user_id(pool: &PgPool, user_id: &Uuid) -> AppResult<Option<Judge>> {
        let judge = sqlx::query_as::<_, Judge>(r#"SELECT * FROM judges WHERE user_id = $1"#)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

        Ok(judge)
    }

    /// Update judge fields
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        association_id: Option<&Uuid>,
        discipline: Option<&str>,
        certification_level: Option<&str>,
    ) -> AppResult<Judge> {
        let judge = sqlx::query_as::<_, Judge>(
            r#"
            UPDATE judges
            SET
                association_id = COALESCE($2, association_id),
                discipline = COALESCE($3, discipline),
                certification_level = COALESCE($4, certification_level),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(association_id)
        .bind(discipline)
        .bind(certification_level)
        .fetch_one(pool)
        .await?;

        Ok(judge)
    }

    /// Delete a judge profile
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM judges WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// List judges with pagination and optional association filter
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        association_id: Option<&Uuid>,
    ) -> AppResult<(Vec<Judge>, i64)> {
        let judges = sqlx::query_as::<_, Judge>(
            r#"
            SELECT * FROM judges
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
            r#"SELECT COUNT(*) FROM judges WHERE ($1::uuid IS NULL OR association_id = $1)"#,
        )
        .bind(association_id)
        .fetch_one(pool)
        .await?;

        Ok((judges, count))
    }

    /// Count total judges
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM judges"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
