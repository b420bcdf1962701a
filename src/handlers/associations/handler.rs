//! Association handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    access::{self, Role},
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::Association,
    services::AssociationService,
    state::AppState,
};

use super::{
    request::{CreateAssociationRequest, ListAssociationsQuery, UpdateAssociationRequest},
    response::AssociationsListResponse,
};

/// List associations (paginated)
pub async fn list_associations(
    State(state): State<AppState>,
    Query(query): Query<ListAssociationsQuery>,
) -> AppResult<Json<AssociationsListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).min(100);

    let (associations, total) = AssociationService::list(
        state.db(),
        page,
        per_page,
        query.department.as_deref(),
        query.search.as_deref(),
    )
    .await?;

    Ok(Json(AssociationsListResponse {
        associations,
        total,
        page,
        per_page,
    }))
}

/// Get a specific association by ID
pub async fn get_association(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Association>> {
    let association = AssociationService::get_by_id(state.db(), &id).await?;
    Ok(Json(association))
}

/// Create a new association (federation admin only)
pub async fn create_association(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateAssociationRequest>,
) -> AppResult<(StatusCode, Json<Association>)> {
    access::require_role(&auth_user.role, Role::ADMIN_FAB)?;
    payload.validate()?;

    let association = AssociationService::create(
        state.db(),
        &payload.name,
        &payload.department,
        &payload.city,
        payload.contact_email.as_deref(),
        payload.contact_phone.as_deref(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(association)))
}

/// Update an association (federation admin only)
pub async fn update_association(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAssociationRequest>,
) -> AppResult<Json<Association>> {
    access::require_role(&auth_user.role, Role::ADMIN_FAB)?;
    payload.validate()?;

    let association = AssociationService::update(
        state.db(),
        &id,
        payload.name.as_deref(),
        payload.department.as_deref(),
        payload.city.as_deref(),
        payload.contact_email.as_deref(),
        payload.contact_phone.as_deref(),
    )
    .await?;

    Ok(Json(association))
}

/// Delete an association (federation admin only)
pub async fn delete_association(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    access::require_role(&auth_user.role, Role::ADMIN_FAB)?;

    AssociationService::delete(state.db(), &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
