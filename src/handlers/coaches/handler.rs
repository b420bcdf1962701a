//! Coach handler implementations

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
    models::Coach,
    services::CoachService,
    state::AppState,
};

use super::{
    request::{CreateCoachRequest, ListCoachesQuery, UpdateCoachRequest},
    response::CoachesListResponse,
};

/// List coaches (paginated)
pub async fn list_coaches(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Query(query): Query<ListCoachesQuery>,
) -> AppResult<Json<CoachesListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).min(100);

    let (coaches, total) =
        CoachService::list(state.db(), page, per_page, query.association_id.as_ref()).await?;

    Ok(Json(CoachesListResponse {
        coaches,
        total,
        page,
        per_page,
    }))
}

/// Get a specific coach by ID
pub async fn get_coach(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Coach>> {
    let coach = CoachService::get_by_id(state.db(), &id).await?;
    Ok(Json(coach))
}

/// Register a coach (association admin only)
pub async fn create_coach(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateCoachRequest>,
) -> AppResult<(StatusCode, Json<Coach>)> {
    access::require_role(&auth_user.role, Role::ADMIN_ASOCIACION)?;
    payload.validate()?;

    let coach = CoachService::create(
        state.db(),
        &payload.user_id,
        &payload.association_id,
        &payload.specialty,
        &payload.certification_level,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(coach)))
}

/// Update a coach (association admin only)
pub async fn update_coach(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCoachRequest>,
) -> AppResult<Json<Coach>> {
    access::require_role(&auth_user.role, Role::ADMIN_ASOCIACION)?;
    payload.validate()?;

    let coach = CoachService::update(
        state.db(),
        &id,
        payload.association_id.as_ref(),
        payload.specialty.as_deref(),
        payload.certification_level.as_deref(),
    )
    .await?;

    Ok(Json(coach))
}

/// Delete a coach (association admin only)
pub async fn delete_coach(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    access::require_role(&auth_user.role, Role::ADMIN_ASOCIACION)?;

    CoachService::delete(state.db(), &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
