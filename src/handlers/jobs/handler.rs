//! Job offer handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    access::{self, Role},
    db::repositories::{job_repo::JobOfferChanges, PgJobOfferRepository},
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::JobOffer,
    services::JobService,
    state::AppState,
};

use super::{
    request::{CreateOfferRequest, ListOffersQuery, UpdateOfferRequest},
    response::OffersListResponse,
};

/// Public board: open offers (paginated)
pub async fn list_offers(
    State(state): State<AppState>,
    Query(query): Query<ListOffersQuery>,
) -> AppResult<Json<OffersListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).min(100);

    let store = PgJobOfferRepository::new(state.db().clone());
    let (offers, total) = JobService::list_open_offers(
        &store,
        page,
        per_page,
        query.location.as_deref(),
        query.contract_type.as_deref(),
    )
    .await?;

    Ok(Json(OffersListResponse {
        offers,
        total,
        page,
        per_page,
    }))
}

/// Get a specific offer by ID
pub async fn get_offer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<JobOffer>> {
    let store = PgJobOfferRepository::new(state.db().clone());
    let offer = JobService::get_offer(&store, &id).await?;
    Ok(Json(offer))
}

/// Publish a new offer (companies only)
pub async fn create_offer(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateOfferRequest>,
) -> AppResult<(StatusCode, Json<JobOffer>)> {
    access::require_role(&auth_user.role, Role::COMPANIES)?;
    payload.validate()?;

    let store = PgJobOfferRepository::new(state.db().clone());
    let offer = JobService::create_offer(
        &store,
        &auth_user.id,
        &payload.title,
        &payload.description,
        &payload.location,
        &payload.contract_type,
        payload.salary_min,
        payload.salary_max,
        payload.deadline,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(offer)))
}

/// List the current company's offers, any status
pub async fn list_my_offers(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListOffersQuery>,
) -> AppResult<Json<OffersListResponse>> {
    access::require_role(&auth_user.role, Role::COMPANIES)?;

    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).min(100);

    let store = PgJobOfferRepository::new(state.db().clone());
    let (offers, total) =
        JobService::list_company_offers(&store, &auth_user.id, page, per_page).await?;

    Ok(Json(OffersListResponse {
        offers,
        total,
        page,
        per_page,
    }))
}

/// Update an offer (owning company only)
pub async fn update_offer(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateOfferRequest>,
) -> AppResult<Json<JobOffer>> {
    access::require_role(&auth_user.role, Role::COMPANIES)?;
    payload.validate()?;

    let store = PgJobOfferRepository::new(state.db().clone());
    let offer = JobService::update_offer(
        &store,
        &auth_user.id,
        &id,
        JobOfferChanges {
            title: payload.title,
            description: payload.description,
            location: payload.location,
            contract_type: payload.contract_type,
            salary_min: payload.salary_min,
            salary_max: payload.salary_max,
            deadline: payload.deadline,
        },
    )
    .await?;

    Ok(Json(offer))
}

/// Close an offer (owning company only)
pub async fn close_offer(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<JobOffer>> {
    access::require_role(&auth_user.role, Role::COMPANIES)?;

    let store = PgJobOfferRepository::new(state.db().clone());
    let offer = JobService::close_offer(&store, &auth_user.id, &id).await?;

    Ok(Json(offer))
}

/// Delete an offer (owning company only)
pub async fn delete_offer(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    access::require_role(&auth_user.role, Role::COMPANIES)?;

    let store = PgJobOfferRepository::new(state.db().clone());
    JobService::delete_offer(&store, &auth_user.id, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
