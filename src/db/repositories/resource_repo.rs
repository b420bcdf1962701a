//! Resource repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::Resource;

/// Repository for resource database operations
pub struct ResourceRepository;

impl ResourceRepository {
    /// Create a new resource record
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        title: &str,
        description: Option<&str>,
        category: &str,
        file_name: &str,
        stored_name: &str,
        content_type: &str,
        file_size: i64,
        checksum: &str,
        uploaded_by: &Uuid,
    ) -> AppResult<Resource> {
        let resource = sqlx::query_as::<_, Resource>(
            r#"
            INSERT INTO resources
                (title, description, category, file_name, stored_name,
                 content_type, file_size, checksum, uploaded_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(category)
        .bind(file_name)
        .bind(stored_name)
        .bind(content_type)
        .bind(file_size)
        .bind(checksum)
        .bind(uploaded_by)
        .fetch_one(pool)
        .await?;

        Ok(resource)
    }

    /// Find resource by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Resource>> {
        let resource = sqlx::query_as::<_, Resource>(r#"SELECT * FROM resources WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(resource)
    }

    /// Delete a resource record
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM resources WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// List resources with pagination and optional category filter
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        category: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<(Vec<Resource>, i64)> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let resources = sqlx::query_as::<_, Resource>(
            r#"
            SELECT * FROM resources
            WHERE
                ($1::text IS NULL OR category = $1)
                AND ($2::text IS NULL OR title ILIKE $2)
            ORDER BY created_at DESC
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(category)
        .bind(&search_pattern)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM resources
            WHERE
                ($1::text IS NULL OR category = $1)
                AND ($2::text IS NULL OR title ILIKE $2)
            "#,
        )
        .bind(category)
        .bind(&search_pattern)
        .fetch_one(pool)
        .await?;

        Ok((resources, count))
    }

    /// Count total resources
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM resources"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
