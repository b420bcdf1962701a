//! Coach service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{AssociationRepository, CoachRepository, UserRepository},
    error::{AppError, AppResult},
    models::Coach,
};

/// Coach service for business logic
pub struct CoachService;

impl CoachService {
    /// Create a coach profile for an existing user
    pub async fn create(
        pool: &PgPool,
        user_id: &Uuid,
        association_id: &Uuid,
        specialty: &str,
        certification_level: &str,
    ) -> AppResult<Coach> {
        if UserRepository::find_by_id(pool, user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        if AssociationRepository::find_by_id(pool, association_id).await?.is_none() {
            return Err(AppError::NotFound("Association not found".to_string()));
        }
        if CoachRepository::find_by_user_id(pool, user_id).await?.is_some() {
            return Err(AppError::AlreadyExists(
                "User already has a coach profile".to_string(),
            ));
        }

        CoachRepository::create(pool, user_id, association_id, specialty, certification_level).await
    }

    /// Get coach by ID
    pub async fn get_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Coach> {
        CoachRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Coach not found".to_string()))
    }

    /// List coaches with pagination
    pub async fn list(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        association_id: Option<&Uuid>,
    ) -> AppResult<(Vec<Coach>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        CoachRepository::list(pool, offset, limit, association_id).await
    }

    /// Update a coach profile
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        association_id: Option<&Uuid>,
        specialty: Option<&str>,
        certification_level: Option<&str>,
    ) -> AppResult<Coach> {
        Self::get_by_id(pool, id).await?;

        if let Some(association_id) = association_id {
            if AssociationRepository::find_by_id(pool, association_id).await?.is_none() {
                return Err(AppError::NotFound("Association not found".to_string()));
            }
        }

        CoachRepository::update(pool, id, association_id, specialty, certification_level).await
    }

    /// Delete a coach profile
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        Self::get_by_id(pool, id).await?;
        CoachRepository::delete(pool, id).await
    }
}
