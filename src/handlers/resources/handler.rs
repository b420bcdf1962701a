//! Resource handler implementations

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    access::{self, Role},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::Resource,
    services::ResourceService,
    state::AppState,
};

use super::{request::ListResourcesQuery, response::ResourcesListResponse};

/// List resources (paginated)
pub async fn list_resources(
    State(state): State<AppState>,
    Query(query): Query<ListResourcesQuery>,
) -> AppResult<Json<ResourcesListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).min(100);

    let (resources, total) = ResourceService::list(
        state.db(),
        page,
        per_page,
        query.category.as_deref(),
        query.search.as_deref(),
    )
    .await?;

    Ok(Json(ResourcesListResponse {
        resources,
        total,
        page,
        per_page,
    }))
}

/// Get a specific resource by ID
pub async fn get_resource(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Resource>> {
    let resource = ResourceService::get_by_id(state.db(), &id).await?;
    Ok(Json(resource))
}

/// Upload a resource (federation admin only)
///
/// Multipart form: `title`, optional `description`, `category`, and a
/// single `file` part.
pub async fn upload_resource(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<Resource>)> {
    access::require_role(&auth_user.role, Role::ADMIN_FAB)?;

    let mut title: Option<String> = None;
    let mut description: Option<String> = None;
    let mut category: Option<String> = None;
    let mut file: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(e.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("title") => {
                title = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::InvalidInput(e.to_string()))?,
                );
            }
            Some("description") => {
                description = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::InvalidInput(e.to_string()))?,
                );
            }
            Some("category") => {
                category = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::InvalidInput(e.to_string()))?,
                );
            }
            Some("file") => {
                let file_name = field
                    .file_name()
                    .ok_or_else(|| AppError::InvalidInput("File part has no file name".to_string()))?
                    .to_string();
                let content_type = field
                    .content_type()
                    .ok_or_else(|| {
                        AppError::InvalidInput("File part has no content type".to_string())
                    })?
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::InvalidInput(e.to_string()))?;
                file = Some((file_name, content_type, data.to_vec()));
            }
            _ => {}
        }
    }

    let title = title.ok_or_else(|| AppError::Validation("Missing title".to_string()))?;
    let category = category.ok_or_else(|| AppError::Validation("Missing category".to_string()))?;
    let (file_name, content_type, data) =
        file.ok_or_else(|| AppError::Validation("Missing file".to_string()))?;

    let resource = ResourceService::upload(
        state.db(),
        &state.config().storage.upload_path,
        &auth_user.id,
        &title,
        description.as_deref(),
        &category,
        &file_name,
        &content_type,
        &data,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(resource)))
}

/// Delete a resource (federation admin only)
pub async fn delete_resource(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    access::require_role(&auth_user.role, Role::ADMIN_FAB)?;

    ResourceService::delete(state.db(), &state.config().storage.upload_path, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
