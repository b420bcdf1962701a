//! Judge handler implementations

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
    models::Judge,
    services::JudgeService,
    state::AppState,
};

use super::{
    request::{CreateJudgeRequest, ListJudgesQuery, UpdateJudgeRequest},
    response::JudgesListResponse,
};

/// List judges (paginated)
pub async fn list_judges(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Query(query): Query<ListJudgesQuery>,
) -> AppResult<Json<JudgesListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).min(100);

    let (judges, total) =
        JudgeService::list(state.db(), page, per_page, query.association_id.as_ref()).await?;

    Ok(Json(JudgesListResponse {
        judges,
        total,
        page,
        per_page,
    }))
}

/// Get a specific judge by ID
pub async fn get_judge(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Judge>> {
    let judge = JudgeService::get_by_id(state.db(), &id).await?;
    Ok(Json(judge))
}

/// Register a judge (association admin only)
pub async fn create_judge(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateJudgeRequest>,
) -> AppResult<(StatusCode, Json<Judge>)> {
    access::require_role(&auth_user.role, Role::ADMIN_ASOCIACION)?;
    payload.validate()?;

    let judge = JudgeService::create(
        state.db(),
        &payload.user_id,
        &payload.association_id,
        &payload.discipline,
        &payload.certification_level,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(judge)))
}

/// Update a judge (association admin only)
pub async fn update_judge(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateJudgeRequest>,
) -> AppResult<Json<Judge>> {
    access::require_role(&auth_user.role, Role::ADMIN_ASOCIACION)?;
    payload.validate()?;

    let judge = JudgeService::update(
        state.db(),
        &id,
        payload.association_id.as_ref(),
        payload.discipline.as_deref(),
        payload.certification_level.as_deref(),
    )
    .await?;

    Ok(Json(judge))
}

/// Delete a judge (association admin only)
pub async fn delete_judge(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    access::require_role(&auth_user.role, Role::ADMIN_ASOCIACION)?;

    JudgeService::delete(state.db(), &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
