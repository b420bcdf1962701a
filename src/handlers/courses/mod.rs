//! Course management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Course routes; the catalog is public, management and enrollment are gated
pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(handler::list_courses))
        .route("/{id}", get(handler::get_course));

    let protected = Router::new()
        .route("/", post(handler::create_course))
        .route("/{id}", put(handler::update_course))
        .route("/{id}", delete(handler::delete_course))
        .route("/{id}/enroll", post(handler::enroll))
        .route("/{id}/enroll", delete(handler::withdraw))
        .route("/{id}/enrollments", get(handler::list_enrollments))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}
