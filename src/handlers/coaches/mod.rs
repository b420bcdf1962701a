//! Coach management handlers

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

/// Coach routes (registry is behind login)
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_coaches))
        .route("/", post(handler::create_coach))
        .route("/{id}", get(handler::get_coach))
        .route("/{id}", put(handler::update_coach))
        .route("/{id}", delete(handler::delete_coach))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
