//! Athlete management handlers

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

/// Athlete routes (registry is behind login)
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_athletes))
        .route("/", post(handler::create_athlete))
        .route("/{id}", get(handler::get_athlete))
        .route("/{id}", put(handler::update_athlete))
        .route("/{id}", delete(handler::delete_athlete))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
