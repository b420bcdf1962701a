//! Resource service

use std::path::Path;

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::ResourceRepository,
    error::{AppError, AppResult},
    models::Resource,
    utils::{
        crypto::hash_bytes,
        upload::{ensure_upload_dir, stored_file_name, validate_file_size, validate_file_type},
        validation::validate_resource_category,
    },
};

/// Resource service for business logic
pub struct ResourceService;

impl ResourceService {
    /// Store an uploaded file and record it
    #[allow(clippy::too_many_arguments)]
    pub async fn upload(
        pool: &PgPool,
        upload_base: &Path,
        uploaded_by: &Uuid,
        title: &str,
        description: Option<&str>,
        category: &str,
        file_name: &str,
        content_type: &str,
        data: &[u8],
    ) -> AppResult<Resource> {
        validate_resource_category(category)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validate_file_type(file_name, content_type)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validate_file_size(data.len())
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let checksum = hash_bytes(data);
        let stored_name = stored_file_name(file_name);

        let dir = ensure_upload_dir(upload_base, category).await?;
        tokio::fs::write(dir.join(&stored_name), data).await?;

        ResourceRepository::create(
            pool,
            title,
            description,
            category,
            file_name,
            &stored_name,
            content_type,
            data.len() as i64,
            &checksum,
            uploaded_by,
        )
        .await
    }

    /// Get resource by ID
    pub async fn get_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Resource> {
        ResourceRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Resource not found".to_string()))
    }

    /// List resources with pagination
    pub async fn list(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        category: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<(Vec<Resource>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        ResourceRepository::list(pool, offset, limit, category, search).await
    }

    /// Delete a resource and its file
    pub async fn delete(pool: &PgPool, upload_base: &Path, id: &Uuid) -> AppResult<()> {
        let resource = Self::get_by_id(pool, id).await?;

        ResourceRepository::delete(pool, id).await?;

        // Remove the file; a missing file is not an error once the record is gone
        let path = upload_base.join(&resource.category).join(&resource.stored_name);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                return Err(e.into());
            }
        }

        Ok(())
    }
}
