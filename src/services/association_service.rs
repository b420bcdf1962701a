//! Association service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::AssociationRepository,
    error::{AppError, AppResult},
    models::Association,
};

/// Association service for business logic
pub struct AssociationService;

impl AssociationService {
    /// Create a new association
    pub async fn create(
        pool: &PgPool,
        name: &str,
        department: &str,
        city: &str,
        contact_email: Option<&str>,
        contact_phone: Option<&str>,
    ) -> AppResult<Association> {
        if AssociationRepository::find_by_name(pool, name).await?.is_some() {
            return Err(AppError::AlreadyExists(
                "An association with this name already exists".to_string(),
            ));
        }

        AssociationRepository::create(pool, name, department, city, contact_email, contact_phone)
            .await
    }

    /// Get association by ID
    pub async fn get_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Association> {
        AssociationRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Association not found".to_string()))
    }

    /// List associations with pagination
    pub async fn list(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        department: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<(Vec<Association>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        AssociationRepository::list(pool, offset, limit, department, search).await
    }

    /// Update an association
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        name: Option<&str>,
        department: Option<&str>,
        city: Option<&str>,
        contact_email: Option<&str>,
        contact_phone: Option<&str>,
    ) -> AppResult<Association> {
        Self::get_by_id(pool, id).await?;

        AssociationRepository::update(pool, id, name, department, city, contact_email, contact_phone)
            .await
    }

    /// Delete an association
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        Self::get_by_id(pool, id).await?;
        AssociationRepository::delete(pool, id).await
    }
}
