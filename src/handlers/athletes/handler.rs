//! Athlete handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    access::{self, Role},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::Athlete,
    services::AthleteService,
    state::AppState,
    utils::validation::validate_license_number,
};

use super::{
    request::{CreateAthleteRequest, ListAthletesQuery, UpdateAthleteRequest},
    response::AthletesListResponse,
};

/// List athletes (paginated)
pub async fn list_athletes(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Query(query): Query<ListAthletesQuery>,
) -> AppResult<Json<AthletesListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).min(100);

    let (athletes, total) = AthleteService::list(
        state.db(),
        page,
        per_page,
        query.association_id.as_ref(),
        query.discipline.as_deref(),
        query.category.as_deref(),
    )
    .await?;

    Ok(Json(AthletesListResponse {
        athletes,
        total,
        page,
        per_page,
    }))
}

/// Get a specific athlete by ID
pub async fn get_athlete(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Athlete>> {
    let athlete = AthleteService::get_by_id(state.db(), &id).await?;
    Ok(Json(athlete))
}

/// Register an athlete (association admin only)
pub async fn create_athlete(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateAthleteRequest>,
) -> AppResult<(StatusCode, Json<Athlete>)> {
    access::require_role(&auth_user.role, Role::ADMIN_ASOCIACION)?;
    payload.validate()?;
    validate_license_number(&payload.license_number)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let athlete = AthleteService::create(
        state.db(),
        &payload.user_id,
        &payload.association_id,
        payload.birth_date,
        &payload.gender,
        &payload.discipline,
        &payload.category,
        &payload.license_number,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(athlete)))
}

/// Update an athlete (association admin only)
pub async fn update_athlete(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAthleteRequest>,
) -> AppResult<Json<Athlete>> {
    access::require_role(&auth_user.role, Role::ADMIN_ASOCIACION)?;
    payload.validate()?;

    let athlete = AthleteService::update(
        state.db(),
        &id,
        payload.association_id.as_ref(),
        payload.discipline.as_deref(),
        payload.category.as_deref(),
    )
    .await?;

    Ok(Json(athlete))
}

/// Delete an athlete (association admin only)
pub async fn delete_athlete(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    access::require_role(&auth_user.role, Role::ADMIN_ASOCIACION)?;

    AthleteService::delete(state.db(), &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
