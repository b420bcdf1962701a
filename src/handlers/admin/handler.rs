//! Admin handler implementations

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    access::{self, AccountStatus, Role},
    db::repositories::PgJobOfferRepository,
    error::{AppError, AppResult},
    handlers::users::request::ListUsersQuery,
    handlers::users::response::UserProfileResponse,
    middleware::auth::AuthenticatedUser,
    models::JobOffer,
    services::{admin_service::PlatformStats, AdminService, JobService, UserService},
    state::AppState,
};

use super::{request::UpdateUserRoleRequest, response::AdminUsersListResponse};

/// List all users with admin filters (pending queue etc.)
pub async fn list_all_users(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<AdminUsersListResponse>> {
    access::require_role(&auth_user.role, Role::ADMIN_FAB)?;

    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).min(100);

    let role = query
        .role
        .as_deref()
        .map(str::parse::<Role>)
        .transpose()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let status = query
        .status
        .as_deref()
        .map(str::parse::<AccountStatus>)
        .transpose()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (users, total) = UserService::list_users(
        state.db(),
        page,
        per_page,
        query.search.as_deref(),
        role,
        status,
    )
    .await?;

    Ok(Json(AdminUsersListResponse {
        users: users.into_iter().map(UserProfileResponse::from).collect(),
        total,
        page,
        per_page,
    }))
}

/// Approve a pending account
pub async fn approve_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserProfileResponse>> {
    access::require_role(&auth_user.role, Role::ADMIN_FAB)?;

    let user = AdminService::approve_user(state.db(), &id).await?;

    Ok(Json(UserProfileResponse::from(user)))
}

/// Reject a pending account
pub async fn reject_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserProfileResponse>> {
    access::require_role(&auth_user.role, Role::ADMIN_FAB)?;

    let user = AdminService::reject_user(state.db(), &id).await?;

    Ok(Json(UserProfileResponse::from(user)))
}

/// Suspend an active account
pub async fn suspend_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserProfileResponse>> {
    access::require_role(&auth_user.role, Role::ADMIN_FAB)?;

    let user = AdminService::suspend_user(state.db(), &auth_user.id, &id).await?;

    Ok(Json(UserProfileResponse::from(user)))
}

/// Reinstate a suspended account
pub async fn reinstate_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserProfileResponse>> {
    access::require_role(&auth_user.role, Role::ADMIN_FAB)?;

    let user = AdminService::reinstate_user(state.db(), &id).await?;

    Ok(Json(UserProfileResponse::from(user)))
}

/// Change a user's role
pub async fn update_user_role(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRoleRequest>,
) -> AppResult<Json<UserProfileResponse>> {
    access::require_role(&auth_user.role, Role::ADMIN_FAB)?;
    payload.validate()?;

    let role = payload
        .role
        .parse::<Role>()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = AdminService::update_user_role(state.db(), &id, role).await?;

    Ok(Json(UserProfileResponse::from(user)))
}

/// Platform statistics
pub async fn get_platform_stats(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<PlatformStats>> {
    access::require_role(&auth_user.role, Role::ADMIN_FAB)?;

    let stats = AdminService::platform_stats(state.db()).await?;

    Ok(Json(stats))
}

/// Close any job offer (employment portal moderation)
pub async fn moderate_close_offer(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<JobOffer>> {
    access::require_role(&auth_user.role, Role::SUPERADMIN)?;

    let store = PgJobOfferRepository::new(state.db().clone());
    let offer = JobService::moderate_close_offer(&store, &id).await?;

    Ok(Json(offer))
}
