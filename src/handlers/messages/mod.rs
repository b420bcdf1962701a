//! Messaging handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Messaging routes (all behind login)
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(handler::send_message))
        .route("/inbox", get(handler::inbox))
        .route("/sent", get(handler::sent))
        .route("/unread-count", get(handler::unread_count))
        .route("/{id}", get(handler::get_message))
        .route("/{id}/read", post(handler::mark_read))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
