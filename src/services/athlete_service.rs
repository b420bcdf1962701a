//! Athlete service

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{AssociationRepository, AthleteRepository, UserRepository},
    error::{AppError, AppResult},
    models::Athlete,
};

/// Athlete service for business logic
pub struct AthleteService;

impl AthleteService {
    /// Create an athlete profile for an existing user
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
        if UserRepository::find_by_id(pool, user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        if AssociationRepository::find_by_id(pool, association_id).await?.is_none() {
            return Err(AppError::NotFound("Association not found".to_string()));
        }
        if AthleteRepository::find_by_user_id(pool, user_id).await?.is_some() {
            return Err(AppError::AlreadyExists(
                "User already has an athlete profile".to_string(),
            ));
        }
        if AthleteRepository::find_by_license(pool, license_number).await?.is_some() {
            return Err(AppError::AlreadyExists(
                "License number already registered".to_string(),
            ));
        }

        AthleteRepository::create(
            pool,
            user_id,
            association_id,
            birth_date,
            gender,
            discipline,
            category,
            license_number,
        )
        .await
    }

    /// Get athlete by ID
    pub async fn get_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Athlete> {
        AthleteRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Athlete not found".to_string()))
    }

    /// List athletes with pagination and filters
    #[allow(clippy::too_many_arguments)]
    pub async fn list(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        association_id: Option<&Uuid>,
        discipline: Option<&str>,
        category: Option<&str>,
    ) -> AppResult<(Vec<Athlete>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        AthleteRepository::list(pool, offset, limit, association_id, discipline, category).await
    }

    /// Update an athlete profile
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        association_id: Option<&Uuid>,
        discipline: Option<&str>,
        category: Option<&str>,
    ) -> AppResult<Athlete> {
        Self::get_by_id(pool, id).await?;

        if let Some(association_id) = association_id {
            if AssociationRepository::find_by_id(pool, association_id).await?.is_none() {
                return Err(AppError::NotFound("Association not found".to_string()));
            }
        }

        AthleteRepository::update(pool, id, association_id, discipline, category).await
    }

    /// Delete an athlete profile
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        Self::get_by_id(pool, id).await?;
        AthleteRepository::delete(pool, id).await
    }
}
