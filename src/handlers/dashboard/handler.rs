//! Dashboard handler implementations

use axum::Json;

use crate::{access, error::AppResult, middleware::auth::AuthenticatedUser};

use super::response::DashboardRouteResponse;

/// Resolve the dashboard landing path for the current principal
///
/// The single place clients ask "where do I land"; no page re-derives the
/// role mapping on its own.
pub async fn resolve_route(auth_user: AuthenticatedUser) -> AppResult<Json<DashboardRouteResponse>> {
    let dashboard = access::resolve_dashboard_route(&auth_user.role, &auth_user.status);

    Ok(Json(DashboardRouteResponse {
        role: auth_user.role,
        status: auth_user.status,
        dashboard,
    }))
}
