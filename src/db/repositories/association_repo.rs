//! Association repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::Association;

/// Repository for association database operations
pub struct AssociationRepository;

impl AssociationRepository {
    /// Create a new association
    pub async fn create(
        pool: &PgPool,
        name: &str,
        department: &str,
        city: &str,
        contact_email: Option<&str>,
        contact_phone: Option<&str>,
    ) -> AppResult<Association> {
        let association = sqlx::query_as::<_, Association>(
            r#"
            INSERT INTO associations (name, department, city, contact_email, contact_phone)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(department)
        .bind(city)
        .bind(contact_email)
        .bind(contact_phone)
        .fetch_one(pool)
        .await?;

        Ok(association)
    }

    /// Find association by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Association>> {
        let association =
            sqlx::query_as::<_, Association>(r#"SELECT * FROM associations WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(association)
    }

    /// Find association by name
    pub async fn find_by_name(pool: &PgPool, name: &str) -> AppResult<Option<Association>> {
        let association =
            sqlx::query_as::<_, Association>(r#"SELECT * FROM associations WHERE name = $1"#)
                .bind(name)
                .fetch_optional(pool)
                .await?;

        Ok(association)
    }

    /// Update association fields
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        name: Option<&str>,
        department: Option<&str>,
        city: Option<&str>,
        contact_email: Option<&str>,
        contact_phone: Option<&str>,
    ) -> AppResult<Association> {
        let association = sqlx::query_as::<_, Association>(
            r#"
            UPDATE associations
            SET
                name = COALESCE($2, name),
                department = COALESCE($3, department),
                city = COALESCE($4, city),
                contact_email = COALESCE($5, contact_email),
                contact_phone = COALESCE($6, contact_phone),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(department)
        .bind(city)
        .bind(contact_email)
        .bind(contact_phone)
        .fetch_one(pool)
        .await?;

        Ok(association)
    }

    /// Delete an association
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM associations WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// List associations with pagination and optional department filter
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        department: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<(Vec<Association>, i64)> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let associations = sqlx::query_as::<_, Association>(
            r#"
            SELECT * FROM associations
            WHERE
                ($1::text IS NULL OR department = $1)
                AND ($2::text IS NULL OR name ILIKE $2)
            ORDER BY name
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(department)
        .bind(&search_pattern)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM associations
            WHERE
                ($1::text IS NULL OR department = $1)
                AND ($2::text IS NULL OR name ILIKE $2)
            "#,
        )
        .bind(department)
        .bind(&search_pattern)
        .fetch_one(pool)
        .await?;

        Ok((associations, count))
    }

    /// Count total associations
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM associations"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
