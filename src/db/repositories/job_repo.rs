//! Job offer repository
//!
//! Offer persistence sits behind the [`JobOfferStore`] trait so the service
//! layer receives an injected interface; tests run against an in-memory
//! implementation of the same trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::JobOffer;

/// Fields for creating a job offer
#[derive(Debug, Clone)]
pub struct NewJobOffer {
    pub company_id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub contract_type: String,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub deadline: Option<DateTime<Utc>>,
}

/// Optional fields for updating a job offer
#[derive(Debug, Clone, Default)]
pub struct JobOfferChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub contract_type: Option<String>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub deadline: Option<DateTime<Utc>>,
}

/// Filters for listing offers
#[derive(Debug, Clone, Default)]
pub struct JobOfferFilter {
    pub location: Option<String>,
    pub contract_type: Option<String>,
    /// Restrict to a publishing company
    pub company_id: Option<Uuid>,
    /// Restrict to a wire status (`open`/`closed`)
    pub status: Option<String>,
}

/// Storage interface for job offers
#[async_trait]
pub trait JobOfferStore: Send + Sync {
    async fn insert(&self, offer: NewJobOffer) -> AppResult<JobOffer>;
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<JobOffer>>;
    async fn update(&self, id: &Uuid, changes: JobOfferChanges) -> AppResult<JobOffer>;
    async fn set_status(&self, id: &Uuid, status: &str) -> AppResult<JobOffer>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
    async fn list(
        &self,
        offset: i64,
        limit: i64,
        filter: &JobOfferFilter,
    ) -> AppResult<(Vec<JobOffer>, i64)>;
    async fn count(&self) -> AppResult<i64>;
}

/// Postgres-backed job offer store
pub struct PgJobOfferRepository {
    pool: PgPool,
}

impl PgJobOfferRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobOfferStore for PgJobOfferRepository {
    async fn insert(&self, offer: NewJobOffer) -> AppResult<JobOffer> {
        let offer = sqlx::query_as::<_, JobOffer>(
            r#"
            INSERT INTO job_offers
                (company_id, title, description, location, contract_type,
                 salary_min, salary_max, deadline)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(offer.company_id)
        .bind(&offer.title)
        .bind(&offer.description)
        .bind(&offer.location)
        .bind(&offer.contract_type)
        .bind(offer.salary_min)
        .bind(offer.salary_max)
        .bind(offer.deadline)
        .fetch_one(&self.pool)
        .await?;

        Ok(offer)
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<JobOffer>> {
        let offer = sqlx::query_as::<_, JobOffer>(r#"SELECT * FROM job_offers WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(offer)
    }

    async fn update(&self, id: &Uuid, changes: JobOfferChanges) -> AppResult<JobOffer> {
        let offer = sqlx::query_as::<_, JobOffer>(
            r#"
            UPDATE job_offers
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                location = COALESCE($4, location),
                contract_type = COALESCE($5, contract_type),
                salary_min = COALESCE($6, salary_min),
                salary_max = COALESCE($7, salary_max),
                deadline = COALESCE($8, deadline),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.title)
        .bind(changes.description)
        .bind(changes.location)
        .bind(changes.contract_type)
        .bind(changes.salary_min)
        .bind(changes.salary_max)
        .bind(changes.deadline)
        .fetch_one(&self.pool)
        .await?;

        Ok(offer)
    }

    async fn set_status(&self, id: &Uuid, status: &str) -> AppResult<JobOffer> {
        let offer = sqlx::query_as::<_, JobOffer>(
            r#"
            UPDATE job_offers
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(offer)
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM job_offers WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list(
        &self,
        offset: i64,
        limit: i64,
        filter: &JobOfferFilter,
    ) -> AppResult<(Vec<JobOffer>, i64)> {
        let offers = sqlx::query_as::<_, JobOffer>(
            r#"
            SELECT * FROM job_offers
            WHERE
                ($1::text IS NULL OR location = $1)
                AND ($2::text IS NULL OR contract_type = $2)
                AND ($3::uuid IS NULL OR company_id = $3)
                AND ($4::text IS NULL OR status = $4)
            ORDER BY created_at DESC
            OFFSET $5 LIMIT $6
            "#,
        )
        .bind(&filter.location)
        .bind(&filter.contract_type)
        .bind(filter.company_id)
        .bind(&filter.status)
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM job_offers
            WHERE
                ($1::text IS NULL OR location = $1)
                AND ($2::text IS NULL OR contract_type = $2)
                AND ($3::uuid IS NULL OR company_id = $3)
                AND ($4::text IS NULL OR status = $4)
            "#,
        )
        .bind(&filter.location)
        .bind(&filter.contract_type)
        .bind(filter.company_id)
        .bind(&filter.status)
        .fetch_one(&self.pool)
        .await?;

        Ok((offers, count))
    }

    async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM job_offers"#)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
