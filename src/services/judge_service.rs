//! Judge service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{AssociationRepository, JudgeRepository, UserRepository},
    error::{AppError, AppResult},
    models::Judge,
};

/// Judge service for business logic
pub struct JudgeService;

impl JudgeService {
    /// Create a judge profile for an existing user
    pub async fn create(
        pool: &PgPool,
        user_id: &Uuid,
        association_id: &Uuid,
        discipline: &str,
        certification_level: &str,
    ) -> AppResult<Judge> {
        if UserRepository::find_by_id(pool, user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        if AssociationRepository::find_by_id(pool, association_id).await?.is_none() {
            return Err(AppError::NotFound("Association not found".to_string()));
        }
        if JudgeRepository::find_by_user_id(pool, user_id).await?.is_some() {
            return Err(AppError::AlreadyExists(
                "User already has a judge profile".to_string(),
            ));
        }

        JudgeRepository::create(pool, user_id, association_id, discipline, certification_level)
            .await
    }

    /// Get judge by ID
    pub async fn get_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Judge> {
        JudgeRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Judge not found".to_string()))
    }

    /// List judges with pagination
    pub async fn list(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        association_id: Option<&Uuid>,
    ) -> AppResult<(Vec<Judge>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        JudgeRepository::list(pool, offset, limit, association_id).await
    }

    /// Update a judge profile
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        association_id: Option<&Uuid>,
        discipline: Option<&str>,
        certification_level: Option<&str>,
    ) -> AppResult<Judge> {
        Self::get_by_id(pool, id).await?;

        if let Some(association_id) = association_id {
            if AssociationRepository::find_by_id(pool, association_id).await?.is_none() {
                return Err(AppError::NotFound("Association not found".to_string()));
            }
        }

        JudgeRepository::update(pool, id, association_id, discipline, certification_level).await
    }

    /// Delete a judge profile
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        Self::get_by_id(pool, id).await?;
        JudgeRepository::delete(pool, id).await
    }
}
