//! Course handler implementations

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
    models::CourseEnrollment,
    services::CourseService,
    state::AppState,
};

use super::{
    request::{CreateCourseRequest, ListCoursesQuery, UpdateCourseRequest},
    response::{CourseResponse, CoursesListResponse, EnrollmentsResponse},
};

/// List courses (paginated)
pub async fn list_courses(
    State(state): State<AppState>,
    Query(query): Query<ListCoursesQuery>,
) -> AppResult<Json<CoursesListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).min(100);

    let (courses, total) = CourseService::list(
        state.db(),
        page,
        per_page,
        query.discipline.as_deref(),
        query.search.as_deref(),
    )
    .await?;

    let courses = courses.into_iter().map(CourseResponse::from).collect();

    Ok(Json(CoursesListResponse {
        courses,
        total,
        page,
        per_page,
    }))
}

/// Get a specific course by ID
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CourseResponse>> {
    let course = CourseService::get_by_id(state.db(), &id).await?;
    Ok(Json(CourseResponse::from(course)))
}

/// Create a course (federation admin only)
pub async fn create_course(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateCourseRequest>,
) -> AppResult<(StatusCode, Json<CourseResponse>)> {
    access::require_role(&auth_user.role, Role::ADMIN_FAB)?;
    payload.validate()?;

    let course = CourseService::create(
        state.db(),
        &payload.title,
        payload.description.as_deref(),
        &payload.discipline,
        payload.venue.as_deref(),
        payload.start_date,
        payload.end_date,
        payload.capacity,
        &auth_user.id,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(CourseResponse::from(course))))
}

/// Update a course (federation admin only)
pub async fn update_course(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCourseRequest>,
) -> AppResult<Json<CourseResponse>> {
    access::require_role(&auth_user.role, Role::ADMIN_FAB)?;
    payload.validate()?;

    let course = CourseService::update(
        state.db(),
        &id,
        payload.title.as_deref(),
        payload.description.as_deref(),
        payload.venue.as_deref(),
        payload.start_date,
        payload.end_date,
        payload.capacity,
    )
    .await?;

    Ok(Json(CourseResponse::from(course)))
}

/// Delete a course (federation admin only)
pub async fn delete_course(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    access::require_role(&auth_user.role, Role::ADMIN_FAB)?;

    CourseService::delete(state.db(), &id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Enroll the current user in a course
pub async fn enroll(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<(StatusCode, Json<CourseEnrollment>)> {
    let enrollment = CourseService::enroll(state.db(), &id, &auth_user.id).await?;

    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// Withdraw the current user from a course
pub async fn withdraw(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    CourseService::withdraw(state.db(), &id, &auth_user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List enrollments for a course (federation admin only)
pub async fn list_enrollments(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<EnrollmentsResponse>> {
    access::require_role(&auth_user.role, Role::ADMIN_FAB)?;

    let enrollments = CourseService::enrollments(state.db(), &id).await?;
    let total = enrollments.len();

    Ok(Json(EnrollmentsResponse { enrollments, total }))
}
